//! Handler implementations for GitLab MCP tools
//!
//! Organized by domain: health, project, issue, merge_request, repository.
//! Handlers return typed results; the server turns them into tool output.

mod health;
mod issue;
mod merge_request;
mod project;
mod repository;

pub use health::*;
pub use issue::*;
pub use merge_request::*;
pub use project::*;
pub use repository::*;

use mcp_common::{internal_error, invalid_params_with, not_found, IntoMcpError, McpError};
use serde_json::json;

use crate::gitlab::GitLabError;

/// Convert a GitLabError to an MCP error
pub fn gitlab_to_mcp_error(e: GitLabError) -> McpError {
    let message = e.to_string();
    match e {
        GitLabError::Validation { unknown, available } => invalid_params_with(
            message,
            json!({ "unknown_labels": unknown, "available_labels": available }),
        ),
        GitLabError::Conflict { project, iid } => {
            invalid_params_with(message, json!({ "project_id": project, "iid": iid }))
        }
        e if e.is_not_found() => not_found(message),
        _ => internal_error(message),
    }
}

impl IntoMcpError for GitLabError {
    fn into_mcp_error(self) -> McpError {
        gitlab_to_mcp_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_validation_maps_to_invalid_params_with_data() {
        let err = gitlab_to_mcp_error(GitLabError::Validation {
            unknown: vec!["nonexistent".into()],
            available: vec!["bug".into()],
        });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        let data = err.data.unwrap();
        assert_eq!(data["unknown_labels"], json!(["nonexistent"]));
        assert_eq!(data["available_labels"], json!(["bug"]));
    }

    #[test]
    fn test_conflict_maps_to_invalid_params() {
        let err = gitlab_to_mcp_error(GitLabError::Conflict {
            project: "42".into(),
            iid: 7,
        });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data.unwrap()["iid"], 7);
    }

    #[test]
    fn test_http_errors() {
        let missing = gitlab_to_mcp_error(GitLabError::Http {
            status: 404,
            body: "{\"message\":\"404 Not found\"}".into(),
        });
        assert_eq!(missing.code, ErrorCode::RESOURCE_NOT_FOUND);

        let forbidden = gitlab_to_mcp_error(GitLabError::Http {
            status: 403,
            body: "forbidden".into(),
        });
        assert_eq!(forbidden.code, ErrorCode::INTERNAL_ERROR);
        assert!(forbidden.message.contains("403"));
    }
}
