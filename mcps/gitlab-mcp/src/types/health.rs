//! Health check result

use serde::{Deserialize, Serialize};

/// Reachability of the GitLab API
///
/// Serializes as `{"status": "healthy", "version": "16.9.0"}` or
/// `{"status": "unhealthy", "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy { version: String },
    Unhealthy { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let healthy = HealthStatus::Healthy {
            version: "16.9.0".into(),
        };
        assert_eq!(
            serde_json::to_value(&healthy).unwrap(),
            json!({ "status": "healthy", "version": "16.9.0" })
        );

        let unhealthy = HealthStatus::Unhealthy {
            error: "connection refused".into(),
        };
        assert_eq!(
            serde_json::to_value(&unhealthy).unwrap(),
            json!({ "status": "unhealthy", "error": "connection refused" })
        );
    }
}
