//! Parameter types for GitLab MCP tools
//!
//! Organized by domain: project, issue, merge_request, repository

mod issue;
mod merge_request;
mod project;
mod repository;

pub use issue::*;
pub use merge_request::*;
pub use project::*;
pub use repository::*;
