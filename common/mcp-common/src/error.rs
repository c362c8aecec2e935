//! Error helpers for MCP tool implementations
//!
//! Tools return `Result<CallToolResult, McpError>`. The helpers here turn
//! domain errors into the JSON-RPC error kinds MCP clients understand.

use rmcp::ErrorData as McpError;
use serde_json::Value;

/// Result alias used by tool implementations
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of an arbitrary error into an MCP error.
///
/// Server crates implement this for their own error enums so that the
/// mapping (invalid params vs. not found vs. internal) lives next to the
/// error definition.
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {self}"), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("{self:#}"), None)
    }
}

impl IntoMcpError for String {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self, None)
    }
}

impl IntoMcpError for &str {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

/// `.to_mcp_err()` for any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Internal error with a message and no structured data
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params error carrying structured `data` for the caller
///
/// Used when the caller can act on the details, e.g. a list of accepted values.
pub fn invalid_params_with(message: impl Into<String>, data: Value) -> McpError {
    McpError::invalid_params(message.into(), Some(data))
}

/// Resource-not-found error
pub fn not_found(message: impl Into<String>) -> McpError {
    McpError::resource_not_found(message.into(), None)
}
