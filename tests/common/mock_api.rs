//! Mock story-search API server for coordinator tests.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One query string captured from a `/search` request.
#[derive(Debug, Clone)]
pub struct CapturedQuery {
    pub query: String,
    pub page: String,
    pub hits_per_page: String,
}

/// A scripted response for the next `/search` request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    /// A well-formed results page with one hit per object id.
    pub fn page(page: u32, object_ids: &[&str]) -> Self {
        let hits: Vec<serde_json::Value> = object_ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "objectID": id,
                    "title": format!("story {id}"),
                    "author": "tester",
                    "url": format!("https://example.com/{id}"),
                    "num_comments": 1,
                    "points": 1,
                })
            })
            .collect();
        Self::json(&serde_json::json!({ "hits": hits, "page": page }).to_string())
    }

    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "scripted failure"}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedQuery>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock search endpoint. Responses are served in the order they were
/// enqueued; an unscripted request gets a 500.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/search", get(handle_search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a response for the next request.
    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// All captured `/search` queries, in arrival order.
    pub async fn captured_queries(&self) -> Vec<CapturedQuery> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let get = |key: &str| params.get(key).cloned().unwrap_or_default();
    state.requests.lock().await.push(CapturedQuery {
        query: get("query"),
        page: get("page"),
        hits_per_page: get("hitsPerPage"),
    });

    let Some(resp) = state.responses.lock().await.pop_front() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "no scripted response"}"#,
        )
            .into_response();
    };

    (
        StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [("content-type", "application/json")],
        resp.body,
    )
        .into_response()
}
