//! Read-only navigation of the workspace hierarchy, used to discover the ids
//! the view and task tools take.

use clickup_client::HierarchyApi;
use tracing::debug;

use super::args::{ArgumentMap, FromArguments};
use super::error::ToolError;
use super::helpers::with_details;
use super::validation::ValidationError;

/// Spaces of one workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceListing {
    pub team_id: String,
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceLookup {
    pub space_id: String,
}

/// Folders of one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub space_id: String,
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLookup {
    pub folder_id: String,
}

/// Lists inside one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListListing {
    pub folder_id: String,
    pub archived: Option<bool>,
}

/// Lists sitting directly in a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderlessListListing {
    pub space_id: String,
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLookup {
    pub list_id: String,
}

fn required(
    args: &ArgumentMap,
    key: &str,
    missing: ValidationError,
) -> Result<String, ValidationError> {
    args.identifier(key).ok_or(missing)
}

impl FromArguments for SpaceListing {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            team_id: required(args, "team_id", ValidationError::MissingWorkspaceId)?,
            archived: args.optional_bool("archived")?,
        })
    }
}

impl FromArguments for SpaceLookup {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            space_id: required(args, "space_id", ValidationError::MissingSpaceId)?,
        })
    }
}

impl FromArguments for FolderListing {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            space_id: required(args, "space_id", ValidationError::MissingSpaceId)?,
            archived: args.optional_bool("archived")?,
        })
    }
}

impl FromArguments for FolderLookup {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            folder_id: required(args, "folder_id", ValidationError::MissingFolderId)?,
        })
    }
}

impl FromArguments for ListListing {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            folder_id: required(args, "folder_id", ValidationError::MissingFolderId)?,
            archived: args.optional_bool("archived")?,
        })
    }
}

impl FromArguments for FolderlessListListing {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            space_id: required(args, "space_id", ValidationError::MissingSpaceId)?,
            archived: args.optional_bool("archived")?,
        })
    }
}

impl FromArguments for ListLookup {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        Ok(Self {
            list_id: required(args, "list_id", ValidationError::MissingListId)?,
        })
    }
}

pub async fn get_workspaces<S: HierarchyApi + ?Sized>(service: &S) -> Result<String, ToolError> {
    let workspaces = service.get_workspaces().await?;
    with_details(
        &format!("Retrieved {} workspaces.", workspaces.len()),
        &workspaces,
    )
}

pub async fn get_spaces<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let listing: SpaceListing = args.parse()?;
    debug!(team_id = %listing.team_id, archived = ?listing.archived, "Listing spaces");

    let spaces = service.get_spaces(&listing.team_id, listing.archived).await?;
    let summary = format!(
        "Retrieved {} spaces for workspace {}.",
        spaces.len(),
        listing.team_id
    );
    with_details(&summary, &spaces)
}

pub async fn get_space<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let lookup: SpaceLookup = args.parse()?;
    let space = service.get_space(&lookup.space_id).await?;
    with_details(&format!("Retrieved details for space: {}.", space.name), &space)
}

pub async fn get_folders<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let listing: FolderListing = args.parse()?;
    debug!(space_id = %listing.space_id, archived = ?listing.archived, "Listing folders");

    let folders = service
        .get_folders(&listing.space_id, listing.archived)
        .await?;
    let summary = format!(
        "Retrieved {} folders for space {}.",
        folders.len(),
        listing.space_id
    );
    with_details(&summary, &folders)
}

pub async fn get_folder<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let lookup: FolderLookup = args.parse()?;
    let folder = service.get_folder(&lookup.folder_id).await?;
    with_details(
        &format!("Retrieved details for folder: {}.", folder.name),
        &folder,
    )
}

pub async fn get_lists<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let listing: ListListing = args.parse()?;
    debug!(folder_id = %listing.folder_id, archived = ?listing.archived, "Listing lists");

    let lists = service.get_lists(&listing.folder_id, listing.archived).await?;
    let summary = format!(
        "Retrieved {} lists for folder {}.",
        lists.len(),
        listing.folder_id
    );
    with_details(&summary, &lists)
}

pub async fn get_folderless_lists<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let listing: FolderlessListListing = args.parse()?;
    debug!(space_id = %listing.space_id, "Listing folderless lists");

    let lists = service
        .get_folderless_lists(&listing.space_id, listing.archived)
        .await?;
    let summary = format!(
        "Retrieved {} folderless lists for space {}.",
        lists.len(),
        listing.space_id
    );
    with_details(&summary, &lists)
}

pub async fn get_list<S: HierarchyApi + ?Sized>(
    service: &S,
    args: &ArgumentMap,
) -> Result<String, ToolError> {
    let lookup: ListLookup = args.parse()?;
    let list = service.get_list(&lookup.list_id).await?;
    with_details(&format!("Retrieved details for list: {}.", list.name), &list)
}
