//! ClickUp tool handlers and their parameter types.
//!
//! Each handler is a free async function over one of the `clickup_client`
//! service traits: it validates the raw arguments, makes at most one ClickUp
//! call, and formats a `"<summary> Details: <json>"` text result.
//! Parameter structs derive `JsonSchema` for MCP tool registration.

pub mod args;
pub mod error;
pub mod helpers;
pub mod hierarchy;
pub mod params;
pub mod tasks;
pub mod validation;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use args::{ArgumentMap, FromArguments, RawArguments};
pub use error::ToolError;
pub use params::*;
pub use validation::ValidationError;
