//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::github::GithubError;
pub use crate::output::OutputError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. Any of them aborts the run before an import file
/// is written.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// GitHub API-related errors
    #[error("GitHub API error: {0}")]
    Github(#[from] GithubError),

    /// Artifact read/write errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
