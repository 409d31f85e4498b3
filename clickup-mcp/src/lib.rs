//! ClickUp MCP Server library.
//!
//! Provides the [`server::ClickUpMcpServer`] MCP server handler and the tool
//! handlers behind it. Used by the `clickup-mcp` binary and available for
//! integration testing.

pub mod server;
pub mod tools;
