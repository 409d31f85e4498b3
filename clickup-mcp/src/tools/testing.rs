//! Recording stand-in for the ClickUp API used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use clickup_client::models::{
    CreateTaskRequest, CreateViewRequest, Folder, JsonObject, List, ParentRef, Space,
    SuccessResponse, Task, TaskListRequest, TaskPage, UpdateTaskRequest, UpdateViewRequest, View,
    ViewConfiguration, ViewTasksRequest, ViewType, Workspace,
};
use clickup_client::{ClientError, ClientResult, HierarchyApi, TaskApi, ViewApi};
use serde_json::{json, Value};

/// One call made against the service: operation name plus what it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub input: Value,
}

/// Returns canned data and records every call. With `fail_with` set, every
/// call fails with that status and message instead.
#[derive(Debug, Default)]
pub struct RecordingService {
    pub calls: Mutex<Vec<Call>>,
    pub views: Vec<View>,
    pub tasks: Vec<Task>,
    pub last_page: bool,
    pub fail_with: Option<(u16, String)>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            fail_with: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, op: &'static str, input: Value) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call { op, input });
        match &self.fail_with {
            Some((status, message)) => Err(ClientError::api_error(*status, message.clone())),
            None => Ok(()),
        }
    }
}

pub fn view(id: &str, name: &str) -> View {
    View {
        id: id.to_string(),
        name: name.to_string(),
        view_type: ViewType::List,
        parent: None,
        configuration: ViewConfiguration::default(),
        extra: JsonObject::new(),
    }
}

pub fn task(id: &str, name: &str) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        status: None,
        extra: JsonObject::new(),
    }
}

fn named<T: serde::de::DeserializeOwned>(id: &str, name: &str) -> T {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

#[async_trait]
impl ViewApi for RecordingService {
    async fn get_views(&self, parent: &ParentRef) -> ClientResult<Vec<View>> {
        self.record(
            "get_views",
            json!({ "id": parent.id, "type": parent.parent_type.as_str() }),
        )?;
        Ok(self.views.clone())
    }

    async fn create_view(&self, request: &CreateViewRequest) -> ClientResult<View> {
        self.record(
            "create_view",
            json!({
                "parent": request.parent.to_string(),
                "body": serde_json::to_value(request).unwrap(),
            }),
        )?;
        let mut created = view("v-new", &request.name);
        created.view_type = request.view_type.clone();
        created.configuration = request.configuration.clone();
        Ok(created)
    }

    async fn get_view(&self, view_id: &str) -> ClientResult<View> {
        self.record("get_view", json!(view_id))?;
        Ok(view(view_id, "Sprint Board"))
    }

    async fn update_view(&self, request: &UpdateViewRequest) -> ClientResult<View> {
        self.record(
            "update_view",
            json!({
                "view_id": request.view_id,
                "body": serde_json::to_value(request).unwrap(),
            }),
        )?;
        let name = request.name.as_deref().unwrap_or("Sprint Board");
        Ok(view(&request.view_id, name))
    }

    async fn delete_view(&self, view_id: &str) -> ClientResult<SuccessResponse> {
        self.record("delete_view", json!(view_id))?;
        Ok(SuccessResponse {
            success: Some(true),
            ..SuccessResponse::default()
        })
    }

    async fn get_view_tasks(&self, request: &ViewTasksRequest) -> ClientResult<TaskPage> {
        self.record(
            "get_view_tasks",
            json!({ "view_id": request.view_id, "page": request.page }),
        )?;
        Ok(TaskPage {
            tasks: self.tasks.clone(),
            last_page: self.last_page,
        })
    }
}

#[async_trait]
impl TaskApi for RecordingService {
    async fn get_tasks(&self, request: &TaskListRequest) -> ClientResult<TaskPage> {
        self.record(
            "get_tasks",
            json!({
                "list_id": request.list_id,
                "page": request.page,
                "include_closed": request.include_closed,
            }),
        )?;
        Ok(TaskPage {
            tasks: self.tasks.clone(),
            last_page: self.last_page,
        })
    }

    async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        self.record("get_task", json!(task_id))?;
        Ok(task(task_id, "Write release notes"))
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        self.record(
            "create_task",
            json!({
                "list_id": request.list_id,
                "body": serde_json::to_value(request).unwrap(),
            }),
        )?;
        Ok(task("t-new", &request.name))
    }

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task> {
        self.record(
            "update_task",
            json!({
                "task_id": request.task_id,
                "body": serde_json::to_value(request).unwrap(),
            }),
        )?;
        let name = request.name.as_deref().unwrap_or("Write release notes");
        Ok(task(&request.task_id, name))
    }

    async fn delete_task(&self, task_id: &str) -> ClientResult<SuccessResponse> {
        self.record("delete_task", json!(task_id))?;
        Ok(SuccessResponse::default())
    }
}

#[async_trait]
impl HierarchyApi for RecordingService {
    async fn get_workspaces(&self) -> ClientResult<Vec<Workspace>> {
        self.record("get_workspaces", Value::Null)?;
        Ok(vec![named("9001", "Acme"), named("9002", "Side Project")])
    }

    async fn get_spaces(&self, team_id: &str, archived: Option<bool>) -> ClientResult<Vec<Space>> {
        self.record(
            "get_spaces",
            json!({ "team_id": team_id, "archived": archived }),
        )?;
        Ok(vec![named("s1", "Engineering")])
    }

    async fn get_space(&self, space_id: &str) -> ClientResult<Space> {
        self.record("get_space", json!(space_id))?;
        Ok(named(space_id, "Engineering"))
    }

    async fn get_folders(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<Folder>> {
        self.record(
            "get_folders",
            json!({ "space_id": space_id, "archived": archived }),
        )?;
        Ok(vec![named("f1", "Roadmap"), named("f2", "Ops")])
    }

    async fn get_folder(&self, folder_id: &str) -> ClientResult<Folder> {
        self.record("get_folder", json!(folder_id))?;
        Ok(named(folder_id, "Roadmap"))
    }

    async fn get_lists(&self, folder_id: &str, archived: Option<bool>) -> ClientResult<Vec<List>> {
        self.record(
            "get_lists",
            json!({ "folder_id": folder_id, "archived": archived }),
        )?;
        Ok(vec![named("l1", "Q1"), named("l2", "Q2"), named("l3", "Q3")])
    }

    async fn get_folderless_lists(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<List>> {
        self.record(
            "get_folderless_lists",
            json!({ "space_id": space_id, "archived": archived }),
        )?;
        Ok(vec![named("l9", "Inbox")])
    }

    async fn get_list(&self, list_id: &str) -> ClientResult<List> {
        self.record("get_list", json!(list_id))?;
        Ok(named(list_id, "Inbox"))
    }
}
