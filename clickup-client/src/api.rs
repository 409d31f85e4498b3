//! # ClickUp API Traits
//!
//! Service abstraction the MCP tools are written against. The REST client is
//! the production implementation; tests substitute recording fakes.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{
    CreateTaskRequest, CreateViewRequest, Folder, List, ParentRef, Space, SuccessResponse, Task,
    TaskListRequest, TaskPage, UpdateTaskRequest, UpdateViewRequest, View, ViewTasksRequest,
    Workspace,
};

/// View operations.
#[async_trait]
pub trait ViewApi: Send + Sync {
    /// List the views attached to a team, space, folder or list.
    async fn get_views(&self, parent: &ParentRef) -> ClientResult<Vec<View>>;

    async fn create_view(&self, request: &CreateViewRequest) -> ClientResult<View>;

    async fn get_view(&self, view_id: &str) -> ClientResult<View>;

    /// Apply a partial update. Fields absent from the request are left untouched.
    async fn update_view(&self, request: &UpdateViewRequest) -> ClientResult<View>;

    async fn delete_view(&self, view_id: &str) -> ClientResult<SuccessResponse>;

    /// One page of the tasks visible in a view. No page means ClickUp's default (the first).
    async fn get_view_tasks(&self, request: &ViewTasksRequest) -> ClientResult<TaskPage>;
}

/// Task operations.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn get_tasks(&self, request: &TaskListRequest) -> ClientResult<TaskPage>;

    async fn get_task(&self, task_id: &str) -> ClientResult<Task>;

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task>;

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task>;

    async fn delete_task(&self, task_id: &str) -> ClientResult<SuccessResponse>;
}

/// Workspace hierarchy lookups.
#[async_trait]
pub trait HierarchyApi: Send + Sync {
    async fn get_workspaces(&self) -> ClientResult<Vec<Workspace>>;

    async fn get_spaces(&self, team_id: &str, archived: Option<bool>) -> ClientResult<Vec<Space>>;

    async fn get_space(&self, space_id: &str) -> ClientResult<Space>;

    async fn get_folders(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<Folder>>;

    async fn get_folder(&self, folder_id: &str) -> ClientResult<Folder>;

    async fn get_lists(&self, folder_id: &str, archived: Option<bool>) -> ClientResult<Vec<List>>;

    /// Lists that sit directly in a space rather than inside a folder.
    async fn get_folderless_lists(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<List>>;

    async fn get_list(&self, list_id: &str) -> ClientResult<List>;
}

/// Everything the MCP server needs from ClickUp.
pub trait ClickUpApi: ViewApi + TaskApi + HierarchyApi {}

impl<T> ClickUpApi for T where T: ViewApi + TaskApi + HierarchyApi {}
