//! Rejections raised before any ClickUp call is made.
//!
//! The `Display` text of each variant is the exact message returned to the
//! caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ── views ──
    #[error("Parent ID and a valid Parent Type ('team', 'space', 'folder', 'list') are required.")]
    InvalidParent,

    #[error("View name is required.")]
    MissingViewName,

    #[error("View type ('list', 'board', 'calendar', 'gantt') is required.")]
    InvalidViewType,

    #[error("View ID is required.")]
    MissingViewId,

    #[error("View ID is required for update.")]
    MissingViewIdForUpdate,

    #[error("View ID is required for deletion.")]
    MissingViewIdForDeletion,

    #[error(
        "No fields provided to update the view (at least one updatable field like 'name' is required besides 'view_id')."
    )]
    NoViewUpdateFields,

    #[error("Page parameter must be a non-negative number.")]
    InvalidPage,

    // ── hierarchy ──
    #[error("Workspace ID (team_id) is required.")]
    MissingWorkspaceId,

    #[error("Space ID is required.")]
    MissingSpaceId,

    #[error("Folder ID is required.")]
    MissingFolderId,

    #[error("List ID is required.")]
    MissingListId,

    // ── tasks ──
    #[error("Task ID is required.")]
    MissingTaskId,

    #[error("Task ID is required for update.")]
    MissingTaskIdForUpdate,

    #[error("Task ID is required for deletion.")]
    MissingTaskIdForDeletion,

    #[error("Task name is required.")]
    MissingTaskName,

    #[error(
        "No fields provided to update the task (at least one updatable field like 'name' is required besides 'task_id')."
    )]
    NoTaskUpdateFields,

    #[error("Priority must be an integer between 1 (urgent) and 4 (low).")]
    InvalidPriority,

    /// An optional field was present with the wrong JSON type.
    #[error("Field '{field}' must be {expected}.")]
    FieldType {
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn field_type(field: &str, expected: &'static str) -> Self {
        Self::FieldType {
            field: field.to_string(),
            expected,
        }
    }
}
