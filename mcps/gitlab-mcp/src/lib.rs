//! GitLab MCP Library
//!
//! MCP-compatible tools for the GitLab REST API (v4).
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gitlab_mcp::{config::GitLabConfig, GitLabMcpServer};
//!
//! let server = GitLabMcpServer::new(GitLabConfig::new("https://gitlab.com", token))?;
//! // Use with in-memory transport (EmbeddableMcp) or serve via stdio
//! ```
//!
//! # Features
//! - Projects: list, details
//! - Issues: list, view, notes, create, edit, delete
//! - Merge requests: list, view, create
//! - Labels, branches, users: list
//! - Label pre-validation before issues or merge requests reference labels
//!
//! # Configuration
//! Set `GITLAB_API_PAT` (and optionally `GITLAB_URL`) or configure in
//! `~/.binks/gitlab.toml`

pub mod config;
pub mod gitlab;
pub mod handlers;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::GitLabMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
