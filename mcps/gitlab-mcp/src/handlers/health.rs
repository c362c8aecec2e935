//! Health check handler

use serde_json::Value;
use tracing::warn;

use crate::gitlab::{ApiResponse, GitLabClient, Method};
use crate::types::HealthStatus;

const UNKNOWN_VERSION: &str = "unknown";

/// Call `GET /version`; failures are reported in the status, never raised
///
/// Any 2xx answer counts as healthy. The version is read from a JSON body
/// when there is one and falls back to `"unknown"` otherwise.
pub async fn health_check(client: &GitLabClient) -> HealthStatus {
    match client.call(Method::Get, "version", None).await {
        Ok(response) => HealthStatus::Healthy {
            version: reported_version(&response),
        },
        Err(e) => {
            warn!(error = %e, "GitLab health check failed");
            HealthStatus::Unhealthy {
                error: e.to_string(),
            }
        }
    }
}

fn reported_version(response: &ApiResponse) -> String {
    match response {
        ApiResponse::Json(body) => body
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_VERSION)
            .to_string(),
        ApiResponse::Empty | ApiResponse::Invalid { .. } => UNKNOWN_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reported_version() {
        let json_body = ApiResponse::Json(json!({ "version": "17.0.1", "revision": "abc" }));
        assert_eq!(reported_version(&json_body), "17.0.1");

        let no_version = ApiResponse::Json(json!({ "revision": "abc" }));
        assert_eq!(reported_version(&no_version), "unknown");

        let html = ApiResponse::Invalid {
            body: "<html>ok</html>".into(),
        };
        assert_eq!(reported_version(&html), "unknown");
        assert_eq!(reported_version(&ApiResponse::Empty), "unknown");
    }
}
