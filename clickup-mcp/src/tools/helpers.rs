//! Shared helper functions for MCP tool implementations.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;

use super::error::ToolError;

/// `"<summary> Details: <pretty JSON>"`.
pub fn with_details<T: Serialize + ?Sized>(
    summary: &str,
    detail: &T,
) -> Result<String, ToolError> {
    let json = serde_json::to_string_pretty(detail)?;
    Ok(format!("{} Details: {}", summary, json))
}

/// Page label used in task listing summaries.
pub fn page_label(page: Option<u32>) -> String {
    page.map_or_else(|| "all/first".to_string(), |p| p.to_string())
}

/// Wrap a handler outcome as an MCP tool result: one text block on success,
/// a JSON-RPC error otherwise.
pub fn into_call_result(result: Result<String, ToolError>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(err) => {
            if !matches!(err, ToolError::Validation(_)) {
                tracing::warn!(error = %err, "ClickUp tool call failed");
            }
            Err(err.into())
        }
    }
}
