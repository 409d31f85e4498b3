//! ClickUp v2 REST API client.
//!
//! [`ClickUpApiClient`] implements the [`ViewApi`], [`TaskApi`] and
//! [`HierarchyApi`] traits over HTTP; [`ClientConfig`] resolves the token and
//! endpoint from a config file and the environment.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rest_client;

pub use api::{ClickUpApi, HierarchyApi, TaskApi, ViewApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use rest_client::ClickUpApiClient;
