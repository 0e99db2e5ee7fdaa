//! Jira import document model.
//!
//! These records mirror the JSON shape consumed by Jira's JSON importer:
//! a list of projects, each carrying its issues and the versions they
//! reference.

mod resource;

pub use resource::*;
