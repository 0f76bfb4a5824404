//! Canned upstream API speaking JSONP, for exercising the real client.
//!
//! Serves `/setlists/latest` pages keyed by the `offset`/`limit` query
//! params, and the upcoming feed at `/shows/upcoming.json` only, so the
//! client's candidate-URL fallback is exercised on every fetch.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
struct UpstreamState {
    /// `response.data` arrays, one per page.
    pages: Arc<Vec<Value>>,
    /// Full body of the upcoming feed, served verbatim.
    upcoming_body: Arc<Value>,
}

fn jsonp(body: &Value) -> String {
    format!("jsonp_handler({})", body)
}

async fn latest_setlists(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let limit: usize = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(200);
    let offset: usize = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let page_index = if limit > 0 { offset / limit } else { 0 };

    let data = state
        .pages
        .get(page_index)
        .cloned()
        .unwrap_or_else(|| json!([]));
    jsonp(&json!({ "response": { "data": data } }))
}

async fn upcoming_shows(State(state): State<UpstreamState>) -> impl IntoResponse {
    jsonp(&state.upcoming_body)
}

/// A running mock upstream. Dropping it shuts the server down.
pub struct MockUpstream {
    pub base_url: String,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockUpstream {
    /// `pages` are the per-page `response.data` arrays of the setlists
    /// feed; `upcoming_body` is the complete upcoming-feed body.
    pub async fn spawn(pages: Vec<Value>, upcoming_body: Value) -> Self {
        let state = UpstreamState {
            pages: Arc::new(pages),
            upcoming_body: Arc::new(upcoming_body),
        };

        let app = Router::new()
            .route("/setlists/latest", get(latest_setlists))
            .route("/shows/upcoming.json", get(upcoming_shows))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock upstream failed");
        });

        Self {
            base_url,
            _shutdown_tx: Some(shutdown_tx),
        }
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
