//! MCP Common - shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sends logs to stderr, keeping stdout for the protocol
//! - **Results**: [`json_success`] builds `CallToolResult`s, [`first_text`] reads them back
//! - **Errors**: [`IntoMcpError`] and friends map domain errors to MCP error kinds
//! - **Embeddable**: [`EmbeddableMcp`] runs tools in-process by name
//!
//! ```rust,ignore
//! use mcp_common::json_success;
//!
//! async fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     let data = fetch().await.to_mcp_err()?;
//!     json_success(&data)
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params_with, not_found, IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::{first_text, json_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
