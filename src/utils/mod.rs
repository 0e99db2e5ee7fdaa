//! Text utilities shared by the conversion pipeline.

pub mod dates;
pub mod markup;
