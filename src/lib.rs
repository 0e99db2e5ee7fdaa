//! Convert the issues of a GitHub repository into a Jira JSON import file.
//!
//! The conversion itself lives in [`convert`]; [`github`] retrieves the
//! source records, [`output`] persists the results, and [`app`] ties a run
//! together.

pub mod app;
pub mod config;
pub mod convert;
pub mod error;
pub mod github;
pub mod jira;
pub mod logger;
pub mod output;
pub mod utils;
