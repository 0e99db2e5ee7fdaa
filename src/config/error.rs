//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Configuration file does not exist
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("Failed to load configuration from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// A required value is empty
    #[error("Missing required configuration value: {0}")]
    MissingValue(&'static str),

    /// Custom field specification sets both or neither of `map`/`prefixes`
    #[error("Invalid custom field '{field}': {message}")]
    InvalidCustomField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("home directory"));

        let error = ConfigError::DeserializationFailed("test".to_string());
        assert!(error.to_string().contains("test"));

        let error = ConfigError::MissingValue("jira.project_key");
        assert!(error.to_string().contains("jira.project_key"));

        let error = ConfigError::InvalidCustomField {
            field: "Team".to_string(),
            message: "both set".to_string(),
        };
        assert!(error.to_string().contains("Team"));
        assert!(error.to_string().contains("both set"));
    }

    #[test]
    fn test_config_error_with_path() {
        let path = PathBuf::from("/test/path");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::LoadFailed {
            path: path.clone(),
            source: io_error,
        };
        assert!(error.to_string().contains("/test/path"));

        let error = ConfigError::NotFound { path };
        assert!(error.to_string().contains("/test/path"));
    }
}
