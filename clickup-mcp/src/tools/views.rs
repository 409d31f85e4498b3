//! View tools: list, create, inspect, update, delete, and list the tasks a
//! view shows.

use clickup_client::models::{
    CreateViewRequest, ParentRef, UpdateViewRequest, ViewConfiguration, ViewParentType,
    ViewTasksRequest, ViewType,
};
use clickup_client::ViewApi;
use serde_json::Value;
use tracing::debug;

use super::args::{ArgumentMap, FromArguments};
use super::error::ToolError;
use super::helpers::{page_label, with_details};
use super::validation::ValidationError;

/// Target of `clickup_get_view_details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLookup {
    pub view_id: String,
}

/// Target of `clickup_delete_view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDeletion {
    pub view_id: String,
}

impl FromArguments for ParentRef {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let id = args.identifier("parent_id");
        let parent_type = args
            .get("parent_type")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<ViewParentType>().ok());
        match (id, parent_type) {
            (Some(id), Some(parent_type)) => Ok(ParentRef { id, parent_type }),
            _ => Err(ValidationError::InvalidParent),
        }
    }
}

fn view_configuration(args: &ArgumentMap) -> Result<ViewConfiguration, ValidationError> {
    let mut configuration = ViewConfiguration::default();
    for field in ViewConfiguration::FIELDS {
        if let Some(slot) = configuration.slot_mut(field) {
            *slot = args.optional_object(field)?;
        }
    }
    Ok(configuration)
}

impl FromArguments for CreateViewRequest {
    // name → parent → type
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let name = args
            .non_empty_string("name")
            .ok_or(ValidationError::MissingViewName)?;
        let parent = ParentRef::from_arguments(args)?;
        let view_type = args
            .get("type")
            .and_then(Value::as_str)
            .and_then(ViewType::parse_creatable)
            .ok_or(ValidationError::InvalidViewType)?;

        Ok(CreateViewRequest {
            parent,
            name,
            view_type,
            configuration: view_configuration(args)?,
        })
    }
}

impl FromArguments for ViewLookup {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let view_id = args
            .identifier("view_id")
            .ok_or(ValidationError::MissingViewId)?;
        Ok(Self { view_id })
    }
}

impl FromArguments for UpdateViewRequest {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let view_id = args
            .identifier("view_id")
            .ok_or(ValidationError::MissingViewIdForUpdate)?;

        let mut known = vec!["view_id", "name", "type"];
        known.extend(ViewConfiguration::FIELDS);

        let request = UpdateViewRequest {
            view_id,
            name: args.optional_string("name")?,
            view_type: args.optional_string("type")?.map(ViewType::from),
            configuration: view_configuration(args)?,
            extra: args.remaining(&known),
        };

        if !request.has_changes() {
            return Err(ValidationError::NoViewUpdateFields);
        }
        Ok(request)
    }
}

impl FromArguments for ViewDeletion {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let view_id = args
            .identifier("view_id")
            .ok_or(ValidationError::MissingViewIdForDeletion)?;
        Ok(Self { view_id })
    }
}

impl FromArguments for ViewTasksRequest {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let view_id = args
            .identifier("view_id")
            .ok_or(ValidationError::MissingViewId)?;
        let page = args.page()?;
        Ok(Self { view_id, page })
    }
}

pub async fn get_views<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let parent: ParentRef = args.parse()?;
    debug!(parent_type = %parent.parent_type, parent_id = %parent.id, "Listing views");

    let views = service.get_views(&parent).await?;
    let summary = format!(
        "Retrieved {} views for {} {}.",
        views.len(),
        parent.parent_type,
        parent.id
    );
    with_details(&summary, &views)
}

pub async fn create_view<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: CreateViewRequest = args.parse()?;
    debug!(parent = %request.parent, view_type = %request.view_type, "Creating view");

    let view = service.create_view(&request).await?;
    with_details(&format!("Successfully created view: {}.", view.name), &view)
}

pub async fn get_view_details<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let lookup: ViewLookup = args.parse()?;
    debug!(view_id = %lookup.view_id, "Fetching view");

    let view = service.get_view(&lookup.view_id).await?;
    with_details(&format!("Retrieved details for view: {}.", view.name), &view)
}

pub async fn update_view<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: UpdateViewRequest = args.parse()?;
    debug!(view_id = %request.view_id, "Updating view");

    let view = service.update_view(&request).await?;
    with_details(&format!("Successfully updated view: {}.", view.name), &view)
}

pub async fn delete_view<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let target: ViewDeletion = args.parse()?;
    debug!(view_id = %target.view_id, "Deleting view");

    service.delete_view(&target.view_id).await?;
    Ok("View successfully deleted.".to_string())
}

pub async fn get_view_tasks<S: ViewApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let request: ViewTasksRequest = args.parse()?;
    debug!(view_id = %request.view_id, page = ?request.page, "Listing view tasks");

    let page = service.get_view_tasks(&request).await?;
    let summary = format!(
        "Retrieved {} tasks for view {}. Page: {}. Last Page: {}.",
        page.tasks.len(),
        request.view_id,
        page_label(request.page),
        page.last_page
    );
    with_details(&summary, &page.tasks)
}
