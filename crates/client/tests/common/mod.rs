//! Shared mock GraphQL endpoint for gateway integration tests.
//!
//! Binds a real axum server to an OS-assigned port (`127.0.0.1:0`),
//! records every request the gateway sends, and replays a scripted
//! queue of responses in order.

use std::collections::VecDeque;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::sync::Mutex;

/// One request exactly as the mock endpoint received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Raw `Authorization` header value, if one was sent at all.
    pub authorization: Option<String>,
    /// Parsed JSON body (`{ query, variables }`).
    pub body: serde_json::Value,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<VecDeque<(StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running mock endpoint; the server task is aborted on drop.
pub struct MockGraphqlServer {
    /// Full endpoint URL, e.g. `http://127.0.0.1:49152/graphql`.
    pub url: String,
    state: Arc<MockState>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockGraphqlServer {
    /// Start a server answering with the given JSON bodies in order.
    ///
    /// Requests beyond the script get `200 {"data":{}}` so an
    /// unexpected extra round trip shows up in `request_count` rather
    /// than as a hang.
    pub async fn start(responses: Vec<(StatusCode, serde_json::Value)>) -> Self {
        let raw = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        Self::start_raw(raw).await
    }

    /// Start with raw string bodies, for malformed-payload tests.
    pub async fn start_raw(responses: Vec<(StatusCode, String)>) -> Self {
        let state = Arc::new(MockState {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/graphql", post(graphql))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });

        Self {
            url: format!("http://{addr}/graphql"),
            state,
            handle,
        }
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.requests.lock().await.len()
    }
}

impl Drop for MockGraphqlServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn graphql(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .await
        .push(RecordedRequest {
            authorization,
            body,
        });

    let (status, body) = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or((StatusCode::OK, r#"{"data":{}}"#.to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
