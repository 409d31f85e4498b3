//! Typed models for the ClickUp v2 API.
//!
//! Response models keep every field ClickUp sends: the fields the tools read
//! are typed, everything else lands in a flattened `extra` map so a model can
//! be serialized back without losing data.

pub mod hierarchy;
pub mod task;
pub mod view;

pub use hierarchy::{Folder, List, Space, Workspace};
pub use task::{
    CreateTaskRequest, StatusDetail, Task, TaskListRequest, TaskPage, TaskPriority, TaskStatus,
    UpdateTaskRequest,
};
pub use view::{
    CreateViewRequest, ParentRef, SettingsRecord, UpdateViewRequest, View, ViewConfiguration,
    ViewParent, ViewParentType, ViewTasksRequest, ViewType,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Untyped JSON object, as used for opaque settings and preserved fields.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Body returned by endpoints that acknowledge an action without returning a resource.
///
/// ClickUp usually answers deletes with `{}`; an empty body decodes to the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// ClickUp sends most identifiers as strings, but workspace and a few
/// legacy ids arrive as numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
