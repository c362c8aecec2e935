//! Error types for GitLab API operations

use thiserror::Error;

/// Everything that can go wrong between a tool call and the GitLab API
#[derive(Error, Debug)]
pub enum GitLabError {
    /// Required configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// GitLab answered with a non-success status
    #[error("GitLab API returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never got a response (connect failure, timeout, ...)
    #[error("request to GitLab failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success status but the body was not JSON
    #[error("invalid JSON response from GitLab: {body}")]
    InvalidResponse {
        /// Raw response body
        body: String,
    },

    /// JSON did not match the expected schema
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// One or more requested labels do not exist in the project
    #[error(
        "unknown label(s): {}. Available labels: {}",
        .unknown.join(", "),
        .available.join(", ")
    )]
    Validation {
        unknown: Vec<String>,
        available: Vec<String>,
    },

    /// An issue with the requested iid already exists
    #[error("issue with IID {iid} already exists in project {project}")]
    Conflict { project: String, iid: u64 },

    /// HTTP verb outside GET/POST/PUT/DELETE
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for GitLab operations
pub type GitLabResult<T> = Result<T, GitLabError>;

impl GitLabError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            GitLabError::Http { status, .. } => Some(*status),
            GitLabError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = GitLabError::Http {
            status: 403,
            body: r#"{"message":"403 Forbidden"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"GitLab API returned HTTP 403: {"message":"403 Forbidden"}"#
        );
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error_display() {
        let err = GitLabError::Validation {
            unknown: vec!["nonexistent".into()],
            available: vec!["bug".into(), "feature".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown label(s): nonexistent. Available labels: bug, feature"
        );
    }

    #[test]
    fn test_not_found() {
        let err = GitLabError::Http {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!GitLabError::config("missing token").is_not_found());
    }
}
