//! Configuration loading for gitlab-mcp
//!
//! Configuration is loaded from (later sources win):
//! 1. Default values
//! 2. TOML file at `GITLAB_MCP_CONFIG_PATH`, or `~/.binks/gitlab.toml`
//! 3. Environment variables `GITLAB_URL`, `GITLAB_API_PAT`, `GITLAB_TIMEOUT_SECS`
//!
//! ```toml
//! [gitlab]
//! url = "https://gitlab.example.com"
//! token = "glpat-..."
//! timeout_secs = 30
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gitlab::{GitLabError, GitLabResult};

pub const CONFIG_PATH_ENV: &str = "GITLAB_MCP_CONFIG_PATH";
pub const URL_ENV: &str = "GITLAB_URL";
pub const TOKEN_ENV: &str = "GITLAB_API_PAT";
pub const TIMEOUT_ENV: &str = "GITLAB_TIMEOUT_SECS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gitlab: GitLabConfig,
}

/// Connection settings for the GitLab instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLabConfig {
    /// Instance root, without the `/api/v4` suffix
    #[serde(default = "default_url")]
    pub url: String,
    /// Personal access token sent as a bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://gitlab.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            _ => {
                tracing::info!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(URL_ENV) {
            self.gitlab.url = url;
        }
        if let Some(token) = lookup(TOKEN_ENV) {
            self.gitlab.token = Some(token);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            self.gitlab.timeout_secs = timeout
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds"))?;
        }
        Ok(())
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".binks").join("gitlab.toml"))
    }
}

impl GitLabConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: Some(token.into()),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> GitLabResult<()> {
        self.token()?;

        let url = self.base_url();
        if url.is_empty() {
            return Err(GitLabError::config("GitLab URL cannot be empty"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(GitLabError::config(format!(
                "GitLab URL must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GitLabError::config("timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Instance URL with trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    pub fn token(&self) -> GitLabResult<&str> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(GitLabError::config(format!(
                "GitLab access token is not set ({TOKEN_ENV})"
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gitlab.url, "https://gitlab.com");
        assert_eq!(config.gitlab.timeout(), Duration::from_secs(30));
        assert!(config.gitlab.token.is_none());
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = Config::default().gitlab.validate().unwrap_err();
        assert!(matches!(err, GitLabError::Config(_)));

        let blank = GitLabConfig::new("https://gitlab.com", "   ");
        assert!(matches!(blank.validate(), Err(GitLabError::Config(_))));
    }

    #[test]
    fn test_url_validation() {
        assert!(GitLabConfig::new("https://gitlab.com", "t").validate().is_ok());
        assert!(GitLabConfig::new("gitlab.com", "t").validate().is_err());
        assert!(GitLabConfig::new("", "t").validate().is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let config = GitLabConfig::new("https://gitlab.example.com//", "t");
        assert_eq!(config.base_url(), "https://gitlab.example.com");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                (URL_ENV, "https://git.internal"),
                (TOKEN_ENV, "glpat-abc"),
                (TIMEOUT_ENV, "5"),
            ]))
            .unwrap();

        assert_eq!(config.gitlab.url, "https://git.internal");
        assert_eq!(config.gitlab.token().unwrap(), "glpat-abc");
        assert_eq!(config.gitlab.timeout_secs, 5);
    }

    #[test]
    fn test_bad_timeout_env() {
        let mut config = Config::default();
        assert!(config.apply_env(env(&[(TIMEOUT_ENV, "soon")])).is_err());
    }

    #[test]
    fn test_from_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[gitlab]\nurl = \"https://file.example.com\"\ntoken = \"from-file\""
        )
        .unwrap();

        let mut config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.gitlab.url, "https://file.example.com");
        assert_eq!(config.gitlab.timeout_secs, 30);

        config.apply_env(env(&[(TOKEN_ENV, "from-env")])).unwrap();
        assert_eq!(config.gitlab.token().unwrap(), "from-env");
        assert_eq!(config.gitlab.url, "https://file.example.com");
    }
}
