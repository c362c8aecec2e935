//! GitLab REST API access
//!
//! - [`client`]: authenticated HTTP client and response handling
//! - [`query`]: parameter serialization and query encoding
//! - [`labels`]: label pre-validation for mutating tools
//! - [`error`]: error taxonomy

pub mod client;
pub mod error;
pub mod labels;
pub mod query;

pub use client::{ApiResponse, GitLabClient, Lookup, Method};
pub use error::{GitLabError, GitLabResult};
pub use labels::validate_labels;
pub use query::{encode_query, outgoing, split_labels, Routed};
