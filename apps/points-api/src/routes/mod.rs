//! # Routes
//!
//! HTTP routes for the points API.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                     Handler                Response       │
//! │  ──────  ───────────────────────  ─────────────────────  ────────────── │
//! │  POST    /receipts/process        receipts::process      {"id": "..."}  │
//! │  GET     /receipts/{id}/points    receipts::points       {"points": n}  │
//! │  GET     /health                  health::health         {"status": ..} │
//! │                                                                         │
//! │  Every request passes through tower-http's TraceLayer.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod health;
pub mod receipts;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(receipts::process))
        .route("/receipts/{id}/points", get(receipts::points))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    /// Sends a request and returns the status and JSON body.
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }
}
