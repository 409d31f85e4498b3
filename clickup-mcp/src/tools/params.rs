//! Documented parameter structs for all MCP tools.
//!
//! These only feed the JSON Schema advertised in `tools/list`. Incoming
//! arguments are validated by [`super::args`], so the wording of a rejection
//! never depends on serde.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Entity a view collection belongs to.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParentTypeParam {
    Team,
    Space,
    Folder,
    List,
}

/// View layouts that can be created.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewTypeParam {
    List,
    Board,
    Calendar,
    Gantt,
}

// ── views ──

/// Parameters for the `clickup_get_views` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetViewsParams {
    #[schemars(description = "ID of the parent Team, Space, Folder, or List")]
    pub parent_id: String,
    #[schemars(description = "Type of the parent: 'team', 'space', 'folder' or 'list'")]
    pub parent_type: ParentTypeParam,
}

/// Parameters for the `clickup_create_view` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateViewParams {
    #[schemars(description = "ID of the parent Team, Space, Folder, or List")]
    pub parent_id: String,
    #[schemars(description = "Type of the parent: 'team', 'space', 'folder' or 'list'")]
    pub parent_type: ParentTypeParam,
    #[schemars(description = "Name of the new View")]
    pub name: String,
    #[serde(rename = "type")]
    #[schemars(description = "View layout: 'list', 'board', 'calendar' or 'gantt'")]
    pub view_type: ViewTypeParam,
    #[schemars(description = "Grouping settings (e.g. {\"field\": \"status\", \"dir\": 1})")]
    pub grouping: Option<Map<String, Value>>,
    #[schemars(description = "Divide settings")]
    pub divide: Option<Map<String, Value>>,
    #[schemars(
        description = "Sorting settings (e.g. {\"fields\": [{\"field\": \"dueDate\", \"dir\": -1}]})"
    )]
    pub sorting: Option<Map<String, Value>>,
    #[schemars(description = "Filter settings (e.g. {\"op\": \"AND\", \"fields\": []})")]
    pub filters: Option<Map<String, Value>>,
    #[schemars(description = "Column settings")]
    pub columns: Option<Map<String, Value>>,
    #[schemars(description = "Team sidebar settings")]
    pub team_sidebar: Option<Map<String, Value>>,
    #[schemars(description = "Additional display settings")]
    pub settings: Option<Map<String, Value>>,
}

/// Parameters for `clickup_get_view_details` and `clickup_delete_view`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ViewIdParams {
    #[schemars(description = "ID of the View")]
    pub view_id: String,
}

/// Parameters for the `clickup_update_view` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateViewParams {
    #[schemars(description = "ID of the View to update")]
    pub view_id: String,
    #[schemars(description = "New name for the View")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schemars(description = "New View layout")]
    pub view_type: Option<String>,
    #[schemars(description = "Grouping settings")]
    pub grouping: Option<Map<String, Value>>,
    #[schemars(description = "Divide settings")]
    pub divide: Option<Map<String, Value>>,
    #[schemars(description = "Sorting settings")]
    pub sorting: Option<Map<String, Value>>,
    #[schemars(description = "Filter settings")]
    pub filters: Option<Map<String, Value>>,
    #[schemars(description = "Column settings")]
    pub columns: Option<Map<String, Value>>,
    #[schemars(description = "Team sidebar settings")]
    pub team_sidebar: Option<Map<String, Value>>,
    #[schemars(description = "Additional display settings")]
    pub settings: Option<Map<String, Value>>,
}

/// Parameters for the `clickup_get_view_tasks` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ViewTasksParams {
    #[schemars(description = "ID of the View")]
    pub view_id: String,
    #[schemars(description = "Page number to fetch, starting at 0. Omit for the first page.")]
    pub page: Option<u32>,
}

// ── hierarchy ──

/// Parameters for the `clickup_get_spaces` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSpacesParams {
    #[schemars(description = "ID of the Workspace (called team_id by the ClickUp API)")]
    pub team_id: String,
    #[schemars(description = "Include archived Spaces")]
    pub archived: Option<bool>,
}

/// Parameters for the `clickup_get_space` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SpaceIdParams {
    #[schemars(description = "ID of the Space")]
    pub space_id: String,
}

/// Parameters for `clickup_get_folders` and `clickup_get_folderless_lists`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SpaceChildrenParams {
    #[schemars(description = "ID of the Space")]
    pub space_id: String,
    #[schemars(description = "Include archived items")]
    pub archived: Option<bool>,
}

/// Parameters for the `clickup_get_folder` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FolderIdParams {
    #[schemars(description = "ID of the Folder")]
    pub folder_id: String,
}

/// Parameters for the `clickup_get_lists` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetListsParams {
    #[schemars(description = "ID of the Folder")]
    pub folder_id: String,
    #[schemars(description = "Include archived Lists")]
    pub archived: Option<bool>,
}

/// Parameters for the `clickup_get_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListIdParams {
    #[schemars(description = "ID of the List")]
    pub list_id: String,
}

// ── tasks ──

/// Parameters for the `clickup_get_tasks` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "ID of the List")]
    pub list_id: String,
    #[schemars(description = "Page number to fetch, starting at 0. Omit for the first page.")]
    pub page: Option<u32>,
    #[schemars(description = "Include closed tasks")]
    pub include_closed: Option<bool>,
}

/// Parameters for `clickup_get_task` and `clickup_delete_task`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "ID of the Task")]
    pub task_id: String,
}

/// Parameters for the `clickup_create_task` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "ID of the List the Task is created in")]
    pub list_id: String,
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Task description (plain text or markdown)")]
    pub description: Option<String>,
    #[schemars(description = "Status name; must exist on the List")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent), 2 (high), 3 (normal) or 4 (low)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date as Unix time in milliseconds")]
    pub due_date: Option<i64>,
    #[schemars(description = "User IDs to assign")]
    pub assignees: Option<Vec<i64>>,
    #[schemars(description = "Tag names")]
    pub tags: Option<Vec<String>>,
}

/// Parameters for the `clickup_update_task` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "ID of the Task to update")]
    pub task_id: String,
    #[schemars(description = "New Task name")]
    pub name: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "New status name")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent), 2 (high), 3 (normal) or 4 (low)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date as Unix time in milliseconds")]
    pub due_date: Option<i64>,
}
