//! In-process fake of the ClickUp v2 API.
//!
//! Every request is recorded; responses come from a table of canned
//! `(method, path) -> (status, body)` entries. Unknown routes answer 404 with
//! a ClickUp-shaped error body.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use clickup_client::{ClickUpApiClient, ClientConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const TEST_TOKEN: &str = "pk_test_token";
const API_PREFIX: &str = "/api/v2";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
}

#[derive(Debug, Default)]
struct FakeState {
    routes: HashMap<(Method, String), Canned>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for the canned route table.
#[derive(Debug, Default)]
pub struct FakeClickUpBuilder {
    routes: HashMap<(Method, String), Canned>,
}

impl FakeClickUpBuilder {
    /// Answer `method path` (relative to `/api/v2`) with a JSON body.
    pub fn route(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.routes.insert(
            (method, format!("{API_PREFIX}{path}")),
            Canned {
                status: StatusCode::from_u16(status).expect("valid status"),
                body: body.to_string(),
            },
        );
        self
    }

    /// Answer `method path` with a 200 and an empty body.
    pub fn empty(mut self, method: Method, path: &str) -> Self {
        self.routes.insert(
            (method, format!("{API_PREFIX}{path}")),
            Canned {
                status: StatusCode::OK,
                body: String::new(),
            },
        );
        self
    }

    pub async fn start(self) -> FakeClickUp {
        let state = Arc::new(FakeState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/{*path}", any(handle))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        tokio::spawn(async move { server.await });

        FakeClickUp {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
            shutdown: Some(shutdown_tx),
        }
    }
}

/// A running fake. Shuts down when dropped.
#[derive(Debug)]
pub struct FakeClickUp {
    pub base_url: String,
    state: Arc<FakeState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeClickUp {
    pub fn builder() -> FakeClickUpBuilder {
        FakeClickUpBuilder::default()
    }

    pub fn client(&self) -> ClickUpApiClient {
        let mut config = ClientConfig::new(TEST_TOKEN);
        config.base_url = self.base_url.clone();
        ClickUpApiClient::new(&config).expect("client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("lock").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }
}

impl Drop for FakeClickUp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().expect("lock").push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.routes.get(&(method, path)) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, "application/json")],
            canned.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "err": "Route not found", "ECODE": "TEST_404" })),
        )
            .into_response(),
    }
}
