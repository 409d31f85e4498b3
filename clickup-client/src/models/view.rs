//! Views: saved display configurations attached to a team, space, folder or list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{deserialize_id, JsonObject};

/// Opaque settings record (grouping, sorting, filters, columns, ...).
///
/// The tools pass these through untouched, so they are not modelled field by field.
pub type SettingsRecord = JsonObject;

/// The kind of entity a view hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewParentType {
    Team,
    Space,
    Folder,
    List,
}

impl ViewParentType {
    pub const ALL: [ViewParentType; 4] = [Self::Team, Self::Space, Self::Folder, Self::List];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Space => "space",
            Self::Folder => "folder",
            Self::List => "list",
        }
    }

    /// Numeric code ClickUp uses in a view's `parent.type`.
    pub fn type_code(self) -> u8 {
        match self {
            Self::Team => 7,
            Self::Space => 4,
            Self::Folder => 5,
            Self::List => 6,
        }
    }

    pub fn from_type_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.type_code() == code)
    }
}

impl fmt::Display for ViewParentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewParentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown view parent type '{}'", s))
    }
}

/// A view's layout.
///
/// Only the first four can be created through the tools; anything else
/// ClickUp returns (table, timeline, workload, ...) is kept verbatim in
/// [`ViewType::Other`] so it serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewType {
    List,
    Board,
    Calendar,
    Gantt,
    Other(String),
}

impl ViewType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::List => "list",
            Self::Board => "board",
            Self::Calendar => "calendar",
            Self::Gantt => "gantt",
            Self::Other(s) => s,
        }
    }

    /// Parse one of the creatable view types, rejecting everything else.
    pub fn parse_creatable(s: &str) -> Option<Self> {
        match Self::from(s.to_string()) {
            Self::Other(_) => None,
            t => Some(t),
        }
    }
}

impl From<String> for ViewType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "list" => Self::List,
            "board" => Self::Board,
            "calendar" => Self::Calendar,
            "gantt" => Self::Gantt,
            _ => Self::Other(s),
        }
    }
}

impl From<ViewType> for String {
    fn from(t: ViewType) -> Self {
        match t {
            ViewType::Other(s) => s,
            t => t.as_str().to_string(),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `parent` block of a view as returned by ClickUp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub type_code: u8,
}

impl ViewParent {
    pub fn parent_type(&self) -> Option<ViewParentType> {
        ViewParentType::from_type_code(self.type_code)
    }
}

/// A view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ViewParent>,
    #[serde(flatten)]
    pub configuration: ViewConfiguration,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// The settings records shared by view responses, creates and updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divide: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<SettingsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsRecord>,
}

impl ViewConfiguration {
    /// Field names accepted as settings records, in the order they are checked.
    pub const FIELDS: [&'static str; 7] = [
        "grouping",
        "divide",
        "sorting",
        "filters",
        "columns",
        "team_sidebar",
        "settings",
    ];

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Mutable slot for one of [`Self::FIELDS`].
    pub fn slot_mut(&mut self, field: &str) -> Option<&mut Option<SettingsRecord>> {
        match field {
            "grouping" => Some(&mut self.grouping),
            "divide" => Some(&mut self.divide),
            "sorting" => Some(&mut self.sorting),
            "filters" => Some(&mut self.filters),
            "columns" => Some(&mut self.columns),
            "team_sidebar" => Some(&mut self.team_sidebar),
            "settings" => Some(&mut self.settings),
            _ => None,
        }
    }
}

/// Identifies the owner of a view collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub id: String,
    pub parent_type: ViewParentType,
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parent_type, self.id)
    }
}

/// Validated input for creating a view. Serializes to the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateViewRequest {
    #[serde(skip)]
    pub parent: ParentRef,
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    #[serde(flatten)]
    pub configuration: ViewConfiguration,
}

/// Validated input for updating a view. Serializes to the PUT body; only the
/// provided fields are sent.
///
/// Keys outside the known updatable set ride along in `extra` and are
/// forwarded untouched, but never count as a change on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateViewRequest {
    #[serde(skip)]
    pub view_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub view_type: Option<ViewType>,
    #[serde(flatten)]
    pub configuration: ViewConfiguration,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl UpdateViewRequest {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.view_type.is_some() || !self.configuration.is_empty()
    }
}

/// Validated input for listing the tasks visible in a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTasksRequest {
    pub view_id: String,
    pub page: Option<u32>,
}
