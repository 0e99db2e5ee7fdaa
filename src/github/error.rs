//! GitHub API-specific error types.

/// Errors that can occur while retrieving records from GitHub.
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_error_api_error() {
        let error = GithubError::ApiError {
            status: 404,
            message: "Not Found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not Found"));
    }

    #[test]
    fn test_github_error_from_serde() {
        let serde_error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: GithubError = serde_error.into();
        assert!(matches!(error, GithubError::Deserialization(_)));
        assert!(error.to_string().contains("deserialize"));
    }
}
