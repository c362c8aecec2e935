//! HTTP client for the GitLab REST API (v4)
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_mcp::gitlab::{GitLabClient, Method};
//!
//! let client = GitLabClient::new(&config)?;
//! let labels = client.call(Method::Get, "/projects/42/labels", None).await?;
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{GitLabError, GitLabResult};
use super::query::encode_query;
use crate::config::GitLabConfig;

const API_PREFIX: &str = "api/v4";

/// HTTP verbs the GitLab tools use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// POST and PUT carry parameters as a JSON body, the rest as a query string
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = GitLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(GitLabError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Body of a successful GitLab response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// No body at all (typical for DELETE)
    Empty,
    /// Parsed JSON
    Json(Value),
    /// Body that is not JSON; decoding it fails with [`GitLabError::InvalidResponse`]
    Invalid { body: String },
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty)
    }

    /// JSON value of the response, with `Empty` read as `{}`
    pub fn into_json(self) -> GitLabResult<Value> {
        match self {
            ApiResponse::Empty => Ok(Value::Object(Default::default())),
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Invalid { body } => Err(GitLabError::InvalidResponse { body }),
        }
    }

    /// Deserialize the response into a typed schema
    pub fn decode<T: DeserializeOwned>(self) -> GitLabResult<T> {
        Ok(serde_json::from_value(self.into_json()?)?)
    }
}

/// Result of looking up a single resource
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// GitLab answered 404
    NotFound,
}

/// Authenticated GitLab API client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: Client,
    api_root: String,
    token: String,
}

impl GitLabClient {
    /// Build a client from validated configuration
    pub fn new(config: &GitLabConfig) -> GitLabResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(concat!("gitlab-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            api_root: format!("{}/{}", config.base_url(), API_PREFIX),
            token: config.token()?.to_string(),
        })
    }

    /// Full URL for a path relative to the API root
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Perform one request against the API
    ///
    /// GET and DELETE send `params` as a query string, POST and PUT as a JSON
    /// body. Non-success statuses become [`GitLabError::Http`].
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        params: Option<&Value>,
    ) -> GitLabResult<ApiResponse> {
        let url = self.api_url(path);
        let mut request = self
            .http
            .request(method.into(), &url)
            .bearer_auth(&self.token);

        if let Some(params) = params {
            if method.sends_body() {
                request = request.json(params);
            } else {
                let query = encode_query(params);
                if !query.is_empty() {
                    request = request.query(&query);
                }
            }
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "GitLab request failed");
            GitLabError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "GitLab response");

        if !status.is_success() {
            warn!(status = status.as_u16(), "GitLab returned an error status");
            return Err(GitLabError::Http {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(ApiResponse::Empty);
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            Err(e) => {
                warn!(error = %e, "GitLab returned a non-JSON body");
                Ok(ApiResponse::Invalid { body })
            }
        }
    }

    /// GET and decode into `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&Value>,
    ) -> GitLabResult<T> {
        self.call(Method::Get, path, params).await?.decode()
    }

    /// GET a single resource, telling "absent" (404) apart from other failures
    pub async fn lookup<T: DeserializeOwned>(&self, path: &str) -> GitLabResult<Lookup<T>> {
        match self.get(path, None).await {
            Ok(found) => Ok(Lookup::Found(found)),
            Err(e) if e.is_not_found() => Ok(Lookup::NotFound),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> GitLabClient {
        GitLabClient::new(&GitLabConfig::new(url, "token")).unwrap()
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("DELETE".parse::<Method>().unwrap(), Method::Delete);
        assert!(matches!(
            "PATCH".parse::<Method>(),
            Err(GitLabError::UnsupportedMethod(m)) if m == "PATCH"
        ));
    }

    #[test]
    fn test_sends_body() {
        assert!(Method::Post.sends_body());
        assert!(Method::Put.sends_body());
        assert!(!Method::Get.sends_body());
        assert!(!Method::Delete.sends_body());
    }

    #[test]
    fn test_api_url() {
        let c = client("https://gitlab.example.com/");
        assert_eq!(
            c.api_url("//projects/1/issues"),
            "https://gitlab.example.com/api/v4/projects/1/issues"
        );
        assert_eq!(c.api_url("version"), "https://gitlab.example.com/api/v4/version");
    }

    #[test]
    fn test_new_requires_token() {
        let mut config = GitLabConfig::new("https://gitlab.com", "x");
        config.token = None;
        assert!(matches!(GitLabClient::new(&config), Err(GitLabError::Config(_))));
    }

    #[test]
    fn test_api_response_decoding() {
        assert_eq!(
            ApiResponse::Empty.into_json().unwrap(),
            serde_json::json!({})
        );

        let invalid = ApiResponse::Invalid {
            body: "<html>".into(),
        };
        assert!(matches!(
            invalid.decode::<Value>(),
            Err(GitLabError::InvalidResponse { body }) if body == "<html>"
        ));

        let json = ApiResponse::Json(serde_json::json!({ "version": "16.0" }));
        let v: std::collections::HashMap<String, String> = json.decode().unwrap();
        assert_eq!(v["version"], "16.0");
    }
}
