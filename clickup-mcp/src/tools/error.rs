//! Handler error type and its mapping onto MCP errors.

use clickup_client::ClientError;
use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::validation::ValidationError;

/// Why a tool call produced no result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments were rejected; ClickUp was never called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// ClickUp (or the way there) failed. Passed through unchanged.
    #[error(transparent)]
    Remote(#[from] ClientError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::Validation(e) => McpError::invalid_params(e.to_string(), None),
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}
