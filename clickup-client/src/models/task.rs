//! Tasks and paged task listings.

use serde::{Deserialize, Serialize};

use super::{deserialize_id, JsonObject};

/// A task returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Task status. List endpoints send a detail object, some older payloads a bare label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskStatus {
    Label(String),
    Detailed(StatusDetail),
}

impl TaskStatus {
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Label(s) => s,
            TaskStatus::Detailed(d) => &d.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDetail {
    pub status: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One page of tasks. `last_page` is absent on some endpoints; it then defaults to false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub last_page: bool,
}

/// Task priority as ClickUp numbers it: 1 is most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    Urgent,
    High,
    Normal,
    Low,
}

impl TaskPriority {
    pub fn level(self) -> u8 {
        match self {
            TaskPriority::Urgent => 1,
            TaskPriority::High => 2,
            TaskPriority::Normal => 3,
            TaskPriority::Low => 4,
        }
    }
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(TaskPriority::Urgent),
            2 => Ok(TaskPriority::High),
            3 => Ok(TaskPriority::Normal),
            4 => Ok(TaskPriority::Low),
            other => Err(format!("priority {} is outside 1..=4", other)),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(p: TaskPriority) -> Self {
        p.level()
    }
}

/// Validated input for creating a task. Serializes to the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    #[serde(skip)]
    pub list_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Unix epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Validated input for updating a task. Only the provided fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip)]
    pub task_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
}

impl UpdateTaskRequest {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.due_date.is_some()
    }
}

/// Validated input for listing the tasks of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListRequest {
    pub list_id: String,
    pub page: Option<u32>,
    pub include_closed: Option<bool>,
}
