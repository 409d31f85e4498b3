//! MCP ServerHandler implementation for ClickUp.
//!
//! **Views**
//! - `clickup_get_views`: List the views of a team, space, folder or list
//! - `clickup_create_view`: Create a view under one of those parents
//! - `clickup_get_view_details`: Get one view
//! - `clickup_update_view`: Change a view's name, type or configuration
//! - `clickup_delete_view`: Delete a view
//! - `clickup_get_view_tasks`: Page through the tasks a view shows
//!
//! **Hierarchy (read-only)**
//! - `clickup_get_workspaces`, `clickup_get_spaces`, `clickup_get_space`
//! - `clickup_get_folders`, `clickup_get_folder`
//! - `clickup_get_lists`, `clickup_get_folderless_lists`, `clickup_get_list`
//!
//! **Tasks**
//! - `clickup_get_tasks`, `clickup_get_task`
//! - `clickup_create_task`, `clickup_update_task`, `clickup_delete_task`

use std::fmt;
use std::sync::Arc;

use clickup_client::ClickUpApi;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use crate::tools::helpers::into_call_result;
use crate::tools::*;

/// ClickUp MCP server handler. Every tool delegates to one handler in
/// [`crate::tools`] over the shared API client.
#[derive(Clone)]
pub struct ClickUpMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<dyn ClickUpApi>,
}

impl fmt::Debug for ClickUpMcpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickUpMcpServer")
            .field("tools", &self.tool_router.list_all().len())
            .finish_non_exhaustive()
    }
}

impl ClickUpMcpServer {
    pub fn new(client: Arc<dyn ClickUpApi>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    fn api(&self) -> &dyn ClickUpApi {
        self.client.as_ref()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ClickUpMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "ClickUp organizes work as Workspace → Space → Folder → List → Task. \
             Views are saved layouts (list, board, calendar, gantt) attached to a workspace \
             (parent_type 'team'), space, folder or list.\n\
             Discovery: clickup_get_workspaces → clickup_get_spaces → clickup_get_folders / \
             clickup_get_folderless_lists → clickup_get_lists to find the ids other tools take.\n\
             Views: clickup_get_views, clickup_create_view, clickup_get_view_details, \
             clickup_update_view, clickup_delete_view, clickup_get_view_tasks.\n\
             Tasks: clickup_get_tasks, clickup_get_task, clickup_create_task, \
             clickup_update_task, clickup_delete_task.\n\
             Paged tools take a zero-based 'page'. Deletes cannot be undone."
            .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "clickup-mcp".to_string(),
                title: Some("ClickUp MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing ClickUp views, tasks and workspace hierarchy".to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[tool_router(router = tool_router)]
impl ClickUpMcpServer {
    // ── Views ──

    #[tool(
        name = "clickup_get_views",
        description = "Retrieves all Views for a given parent (Team, Space, Folder, or List)."
    )]
    pub async fn get_views(
        &self,
        Parameters(args): Parameters<RawArguments<GetViewsParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::get_views(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_create_view",
        description = "Creates a new View within a Team, Space, Folder, or List."
    )]
    pub async fn create_view(
        &self,
        Parameters(args): Parameters<RawArguments<CreateViewParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::create_view(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_get_view_details",
        description = "Retrieves details for a specific View."
    )]
    pub async fn get_view_details(
        &self,
        Parameters(args): Parameters<RawArguments<ViewIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::get_view_details(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_update_view", description = "Updates an existing View.")]
    pub async fn update_view(
        &self,
        Parameters(args): Parameters<RawArguments<UpdateViewParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::update_view(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_delete_view", description = "Deletes a View.")]
    pub async fn delete_view(
        &self,
        Parameters(args): Parameters<RawArguments<ViewIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::delete_view(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_get_view_tasks",
        description = "Retrieves tasks belonging to a specific View."
    )]
    pub async fn get_view_tasks(
        &self,
        Parameters(args): Parameters<RawArguments<ViewTasksParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(views::get_view_tasks(self.api(), &args.into_inner()).await)
    }

    // ── Hierarchy ──

    #[tool(
        name = "clickup_get_workspaces",
        description = "Retrieves the Workspaces (Teams) the authenticated user belongs to."
    )]
    pub async fn get_workspaces(&self) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_workspaces(self.api()).await)
    }

    #[tool(
        name = "clickup_get_spaces",
        description = "Retrieves the Spaces of a Workspace, optionally only archived ones."
    )]
    pub async fn get_spaces(
        &self,
        Parameters(args): Parameters<RawArguments<GetSpacesParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_spaces(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_get_space", description = "Retrieves details for a specific Space.")]
    pub async fn get_space(
        &self,
        Parameters(args): Parameters<RawArguments<SpaceIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_space(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_get_folders",
        description = "Retrieves the Folders of a Space, optionally only archived ones."
    )]
    pub async fn get_folders(
        &self,
        Parameters(args): Parameters<RawArguments<SpaceChildrenParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_folders(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_get_folder", description = "Retrieves details for a specific Folder.")]
    pub async fn get_folder(
        &self,
        Parameters(args): Parameters<RawArguments<FolderIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_folder(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_get_lists",
        description = "Retrieves the Lists inside a Folder, optionally only archived ones."
    )]
    pub async fn get_lists(
        &self,
        Parameters(args): Parameters<RawArguments<GetListsParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_lists(self.api(), &args.into_inner()).await)
    }

    #[tool(
        name = "clickup_get_folderless_lists",
        description = "Retrieves the Lists that sit directly in a Space, outside any Folder."
    )]
    pub async fn get_folderless_lists(
        &self,
        Parameters(args): Parameters<RawArguments<SpaceChildrenParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_folderless_lists(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_get_list", description = "Retrieves details for a specific List.")]
    pub async fn get_list(
        &self,
        Parameters(args): Parameters<RawArguments<ListIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(hierarchy::get_list(self.api(), &args.into_inner()).await)
    }

    // ── Tasks ──

    #[tool(
        name = "clickup_get_tasks",
        description = "Retrieves a page of tasks from a List, optionally including closed tasks."
    )]
    pub async fn get_tasks(
        &self,
        Parameters(args): Parameters<RawArguments<GetTasksParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(tasks::get_tasks(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_get_task", description = "Retrieves details for a specific Task.")]
    pub async fn get_task(
        &self,
        Parameters(args): Parameters<RawArguments<TaskIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(tasks::get_task(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_create_task", description = "Creates a new Task in a List.")]
    pub async fn create_task(
        &self,
        Parameters(args): Parameters<RawArguments<CreateTaskParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(tasks::create_task(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_update_task", description = "Updates an existing Task.")]
    pub async fn update_task(
        &self,
        Parameters(args): Parameters<RawArguments<UpdateTaskParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(tasks::update_task(self.api(), &args.into_inner()).await)
    }

    #[tool(name = "clickup_delete_task", description = "Deletes a Task.")]
    pub async fn delete_task(
        &self,
        Parameters(args): Parameters<RawArguments<TaskIdParams>>,
    ) -> Result<CallToolResult, McpError> {
        into_call_result(tasks::delete_task(self.api(), &args.into_inner()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::RecordingService;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn server() -> (ClickUpMcpServer, Arc<RecordingService>) {
        let service = Arc::new(RecordingService::new());
        (ClickUpMcpServer::new(service.clone()), service)
    }

    fn raw<P>(value: serde_json::Value) -> Parameters<RawArguments<P>> {
        Parameters(RawArguments::new(value.as_object().cloned().unwrap()))
    }

    fn text(result: CallToolResult) -> String {
        result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .expect("Expected text content")
    }

    #[test]
    fn test_server_info() {
        let (server, _) = server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "clickup-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains("clickup_get_workspaces"));
        assert!(instructions.contains("clickup_get_view_tasks"));
    }

    #[test]
    fn test_view_tool_descriptions() {
        let (server, _) = server();
        let expected = [
            (
                "clickup_get_views",
                "Retrieves all Views for a given parent (Team, Space, Folder, or List).",
            ),
            (
                "clickup_create_view",
                "Creates a new View within a Team, Space, Folder, or List.",
            ),
            (
                "clickup_get_view_details",
                "Retrieves details for a specific View.",
            ),
            ("clickup_update_view", "Updates an existing View."),
            ("clickup_delete_view", "Deletes a View."),
            (
                "clickup_get_view_tasks",
                "Retrieves tasks belonging to a specific View.",
            ),
        ];

        let tools = server.tool_router.list_all();
        for (name, description) in expected {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("{name} not registered"));
            assert_eq!(tool.description.as_deref(), Some(description));
        }
    }

    #[test]
    fn test_all_tools_registered() {
        let (server, _) = server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "clickup_create_task",
                "clickup_create_view",
                "clickup_delete_task",
                "clickup_delete_view",
                "clickup_get_folder",
                "clickup_get_folderless_lists",
                "clickup_get_folders",
                "clickup_get_list",
                "clickup_get_lists",
                "clickup_get_space",
                "clickup_get_spaces",
                "clickup_get_task",
                "clickup_get_tasks",
                "clickup_get_view_details",
                "clickup_get_view_tasks",
                "clickup_get_views",
                "clickup_get_workspaces",
                "clickup_update_task",
                "clickup_update_view",
            ]
        );
        assert!(server
            .tool_router
            .list_all()
            .iter()
            .all(|t| t.description.as_deref().is_some_and(|d| !d.is_empty())));
    }

    #[test]
    fn test_create_view_schema_uses_type_key() {
        let (server, _) = server();
        let tool = server
            .tool_router
            .list_all()
            .into_iter()
            .find(|t| t.name == "clickup_create_view")
            .unwrap();
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("type").is_some());
        assert!(properties.get("parent_type").is_some());
    }

    #[tokio::test]
    async fn test_delete_view_through_server() {
        let (server, service) = server();
        let result = server
            .delete_view(raw(json!({ "view_id": "3c-105" })))
            .await
            .unwrap();
        assert_eq!(text(result), "View successfully deleted.");
        assert_eq!(service.only_call().input, json!("3c-105"));
    }

    #[tokio::test]
    async fn test_validation_becomes_invalid_params() {
        let (server, service) = server();
        let err = server
            .get_views(raw(json!({ "parent_id": "901", "parent_type": "workspace" })))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            err.message,
            "Parent ID and a valid Parent Type ('team', 'space', 'folder', 'list') are required."
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_internal_error() {
        let service = Arc::new(RecordingService::failing(404, "Task not found (ITEM_013)"));
        let server = ClickUpMcpServer::new(service);
        let err = server
            .get_task(raw(json!({ "task_id": "nope" })))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message, "API error: 404 - Task not found (ITEM_013)");
    }

    #[tokio::test]
    async fn test_workspaces_take_no_arguments() {
        let (server, _) = server();
        let result = server.get_workspaces().await.unwrap();
        assert!(text(result).starts_with("Retrieved 2 workspaces. Details: "));
    }
}
