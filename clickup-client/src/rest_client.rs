//! # ClickUp REST Client
//!
//! reqwest-backed implementation of the [`crate::api`] traits against the
//! ClickUp v2 API. One method call is one HTTP round trip; nothing is
//! cached and nothing is retried.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::api::{HierarchyApi, TaskApi, ViewApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    CreateTaskRequest, CreateViewRequest, Folder, List, ParentRef, Space, SuccessResponse, Task,
    TaskListRequest, TaskPage, UpdateTaskRequest, UpdateViewRequest, View, ViewTasksRequest,
    Workspace,
};

/// Error body ClickUp returns with non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    err: Option<String>,
    #[serde(rename = "ECODE")]
    ecode: Option<String>,
}

/// HTTP client for the ClickUp v2 API.
pub struct ClickUpApiClient {
    http: Client,
    base_url: Url,
}

impl fmt::Debug for ClickUpApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickUpApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ClickUpApiClient {
    /// Build a client. The token is attached to every request as a
    /// sensitive `Authorization` header.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::config_error(format!("invalid base_url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::config_error(format!(
                "base_url '{}' cannot carry API paths",
                config.base_url
            )));
        }

        let mut auth = HeaderValue::from_str(config.token.expose_secret()).map_err(|_| {
            ClientError::config_error("API token contains characters not allowed in a header")
        })?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("clickup-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %base_url, timeout_ms = config.timeout_ms, "ClickUp client ready");
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so an id can never escape its position in the path.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::config_error("base_url cannot carry API paths"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!(method = %method, path = url.path(), "ClickUp request");
        Ok(self.http.request(method, url))
    }

    /// Send a request and decode the body. An empty 2xx body decodes as `{}`.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let path = response.url().path().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            let err = error_from_response(status, &body);
            warn!(status = status.as_u16(), path = %path, error = %err, "ClickUp request failed");
            return Err(err);
        }

        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        self.send(self.request(Method::GET, segments)?).await
    }
}

/// Pull one field out of an enveloped response such as `{"views": [...]}`.
fn field<T: DeserializeOwned>(mut body: Value, name: &str) -> ClientResult<T> {
    let value = body
        .as_object_mut()
        .and_then(|map| map.remove(name))
        .ok_or_else(|| ClientError::invalid_response(name, "missing from response body"))?;
    Ok(serde_json::from_value(value)?)
}

fn error_from_response(status: StatusCode, body: &str) -> ClientError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = match parsed {
        Some(ErrorBody {
            err: Some(err),
            ecode: Some(code),
        }) => format!("{} ({})", err, code),
        Some(ErrorBody {
            err: Some(err),
            ecode: None,
        }) => err,
        _ if !body.trim().is_empty() => body.trim().chars().take(200).collect(),
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    if status == StatusCode::UNAUTHORIZED {
        ClientError::AuthError(message)
    } else {
        ClientError::api_error(status.as_u16(), message)
    }
}

fn page_query(page: Option<u32>) -> Vec<(&'static str, String)> {
    page.map(|p| ("page", p.to_string())).into_iter().collect()
}

fn archived_query(archived: Option<bool>) -> Vec<(&'static str, String)> {
    archived
        .map(|a| ("archived", a.to_string()))
        .into_iter()
        .collect()
}

#[async_trait]
impl ViewApi for ClickUpApiClient {
    async fn get_views(&self, parent: &ParentRef) -> ClientResult<Vec<View>> {
        let body: Value = self
            .get(&[parent.parent_type.as_str(), parent.id.as_str(), "view"])
            .await?;
        field(body, "views")
    }

    async fn create_view(&self, request: &CreateViewRequest) -> ClientResult<View> {
        let parent = &request.parent;
        let builder = self
            .request(Method::POST, &[parent.parent_type.as_str(), parent.id.as_str(), "view"])?
            .json(request);
        let body: Value = self.send(builder).await?;
        field(body, "view")
    }

    async fn get_view(&self, view_id: &str) -> ClientResult<View> {
        let body: Value = self.get(&["view", view_id]).await?;
        field(body, "view")
    }

    async fn update_view(&self, request: &UpdateViewRequest) -> ClientResult<View> {
        let builder = self
            .request(Method::PUT, &["view", request.view_id.as_str()])?
            .json(request);
        let body: Value = self.send(builder).await?;
        field(body, "view")
    }

    async fn delete_view(&self, view_id: &str) -> ClientResult<SuccessResponse> {
        self.send(self.request(Method::DELETE, &["view", view_id])?)
            .await
    }

    async fn get_view_tasks(&self, request: &ViewTasksRequest) -> ClientResult<TaskPage> {
        let builder = self
            .request(Method::GET, &["view", request.view_id.as_str(), "task"])?
            .query(&page_query(request.page));
        self.send(builder).await
    }
}

#[async_trait]
impl TaskApi for ClickUpApiClient {
    async fn get_tasks(&self, request: &TaskListRequest) -> ClientResult<TaskPage> {
        let mut query = page_query(request.page);
        if let Some(include_closed) = request.include_closed {
            query.push(("include_closed", include_closed.to_string()));
        }
        let builder = self
            .request(Method::GET, &["list", request.list_id.as_str(), "task"])?
            .query(&query);
        self.send(builder).await
    }

    async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        self.get(&["task", task_id]).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        let builder = self
            .request(Method::POST, &["list", request.list_id.as_str(), "task"])?
            .json(request);
        self.send(builder).await
    }

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task> {
        let builder = self
            .request(Method::PUT, &["task", request.task_id.as_str()])?
            .json(request);
        self.send(builder).await
    }

    async fn delete_task(&self, task_id: &str) -> ClientResult<SuccessResponse> {
        self.send(self.request(Method::DELETE, &["task", task_id])?)
            .await
    }
}

#[async_trait]
impl HierarchyApi for ClickUpApiClient {
    async fn get_workspaces(&self) -> ClientResult<Vec<Workspace>> {
        let body: Value = self.get(&["team"]).await?;
        field(body, "teams")
    }

    async fn get_spaces(&self, team_id: &str, archived: Option<bool>) -> ClientResult<Vec<Space>> {
        let builder = self
            .request(Method::GET, &["team", team_id, "space"])?
            .query(&archived_query(archived));
        let body: Value = self.send(builder).await?;
        field(body, "spaces")
    }

    async fn get_space(&self, space_id: &str) -> ClientResult<Space> {
        self.get(&["space", space_id]).await
    }

    async fn get_folders(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<Folder>> {
        let builder = self
            .request(Method::GET, &["space", space_id, "folder"])?
            .query(&archived_query(archived));
        let body: Value = self.send(builder).await?;
        field(body, "folders")
    }

    async fn get_folder(&self, folder_id: &str) -> ClientResult<Folder> {
        self.get(&["folder", folder_id]).await
    }

    async fn get_lists(&self, folder_id: &str, archived: Option<bool>) -> ClientResult<Vec<List>> {
        let builder = self
            .request(Method::GET, &["folder", folder_id, "list"])?
            .query(&archived_query(archived));
        let body: Value = self.send(builder).await?;
        field(body, "lists")
    }

    async fn get_folderless_lists(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ClientResult<Vec<List>> {
        let builder = self
            .request(Method::GET, &["space", space_id, "list"])?
            .query(&archived_query(archived));
        let body: Value = self.send(builder).await?;
        field(body, "lists")
    }

    async fn get_list(&self, list_id: &str) -> ClientResult<List> {
        self.get(&["list", list_id]).await
    }
}
