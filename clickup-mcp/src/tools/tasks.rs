//! Task tools.

use clickup_client::models::{CreateTaskRequest, TaskListRequest, TaskPriority, UpdateTaskRequest};
use clickup_client::TaskApi;
use tracing::debug;

use super::args::{ArgumentMap, FromArguments};
use super::error::ToolError;
use super::helpers::{page_label, with_details};
use super::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLookup {
    pub task_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDeletion {
    pub task_id: String,
}

/// `priority`, if present, must be one of ClickUp's four levels.
fn priority(args: &ArgumentMap) -> Result<Option<TaskPriority>, ValidationError> {
    let Some(value) = args.get("priority") else {
        return Ok(None);
    };
    value
        .as_u64()
        .and_then(|level| u8::try_from(level).ok())
        .and_then(|level| TaskPriority::try_from(level).ok())
        .map(Some)
        .ok_or(ValidationError::InvalidPriority)
}

impl FromArguments for TaskListRequest {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let list_id = args
            .identifier("list_id")
            .ok_or(ValidationError::MissingListId)?;
        Ok(Self {
            list_id,
            page: args.page()?,
            include_closed: args.optional_bool("include_closed")?,
        })
    }
}

impl FromArguments for TaskLookup {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let task_id = args
            .identifier("task_id")
            .ok_or(ValidationError::MissingTaskId)?;
        Ok(Self { task_id })
    }
}

impl FromArguments for CreateTaskRequest {
    // list → name
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let list_id = args
            .identifier("list_id")
            .ok_or(ValidationError::MissingListId)?;
        let name = args
            .non_empty_string("name")
            .ok_or(ValidationError::MissingTaskName)?;

        Ok(Self {
            list_id,
            name,
            description: args.optional_string("description")?,
            status: args.optional_string("status")?,
            priority: priority(args)?,
            due_date: args.optional_integer("due_date")?,
            assignees: args.optional_integer_list("assignees")?,
            tags: args.optional_string_list("tags")?,
        })
    }
}

impl FromArguments for UpdateTaskRequest {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let task_id = args
            .identifier("task_id")
            .ok_or(ValidationError::MissingTaskIdForUpdate)?;

        let request = Self {
            task_id,
            name: args.optional_string("name")?,
            description: args.optional_string("description")?,
            status: args.optional_string("status")?,
            priority: priority(args)?,
            due_date: args.optional_integer("due_date")?,
        };

        if !request.has_changes() {
            return Err(ValidationError::NoTaskUpdateFields);
        }
        Ok(request)
    }
}

impl FromArguments for TaskDeletion {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let task_id = args
            .identifier("task_id")
            .ok_or(ValidationError::MissingTaskIdForDeletion)?;
        Ok(Self { task_id })
    }
}

pub async fn get_tasks<S: TaskApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: TaskListRequest = args.parse()?;
    debug!(list_id = %request.list_id, page = ?request.page, "Listing tasks");

    let page = service.get_tasks(&request).await?;
    let summary = format!(
        "Retrieved {} tasks for list {}. Page: {}. Last Page: {}.",
        page.tasks.len(),
        request.list_id,
        page_label(request.page),
        page.last_page
    );
    with_details(&summary, &page.tasks)
}

pub async fn get_task<S: TaskApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let lookup: TaskLookup = args.parse()?;
    let task = service.get_task(&lookup.task_id).await?;
    with_details(&format!("Retrieved details for task: {}.", task.name), &task)
}

pub async fn create_task<S: TaskApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: CreateTaskRequest = args.parse()?;
    debug!(list_id = %request.list_id, "Creating task");

    let task = service.create_task(&request).await?;
    with_details(&format!("Successfully created task: {}.", task.name), &task)
}

pub async fn update_task<S: TaskApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: UpdateTaskRequest = args.parse()?;
    debug!(task_id = %request.task_id, "Updating task");

    let task = service.update_task(&request).await?;
    with_details(&format!("Successfully updated task: {}.", task.name), &task)
}

pub async fn delete_task<S: TaskApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let target: TaskDeletion = args.parse()?;
    debug!(task_id = %target.task_id, "Deleting task");

    service.delete_task(&target.task_id).await?;
    Ok("Task successfully deleted.".to_string())
}
