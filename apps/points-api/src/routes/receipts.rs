//! # Receipt Routes
//!
//! Submit a receipt for scoring and look its points up later.
//!
//! ## Receipt Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bind JSON ──── fails? ──► 400 {"msg": rejection text}                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_receipt ── fails? ──► 400 {"msg": "<field> is required"}     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  score_receipt ── bad amount? ──► Zero: 0 points / Reject: 400         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ids.generate() ──► store.put(id, points) ──► 200 {"id": id}           │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get(id) ──► 200 {"points": n}   (unknown id → 0)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use points_core::{score_receipt, validate_receipt, Points, Receipt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::InvalidAmountPolicy;
use crate::error::ApiResult;
use crate::state::AppState;

/// Response to a processed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response to a points lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// POST /receipts/process
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload?;
    validate_receipt(&receipt)?;

    let points = score(&receipt, state.invalid_amount)?;

    let id = state.ids.generate();
    state.store.put(&id, points)?;

    info!(id = %id, retailer = %receipt.retailer, points, "Receipt processed");
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
///
/// An id that was never issued reports 0 points rather than an error.
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = match state.store.get(&id)? {
        Some(points) => points,
        None => {
            debug!(id = %id, "Unknown receipt id, reporting 0 points");
            0
        }
    };

    Ok(Json(PointsResponse { points }))
}

/// Scores a receipt, applying the invalid-amount policy.
fn score(receipt: &Receipt, policy: InvalidAmountPolicy) -> ApiResult<Points> {
    match score_receipt(receipt) {
        Ok(breakdown) => {
            debug!(?breakdown, "Receipt scored");
            Ok(breakdown.total())
        }
        Err(err) => match policy {
            InvalidAmountPolicy::Zero => {
                warn!(error = %err, "Unparseable amount, receipt scores 0");
                Ok(0)
            }
            InvalidAmountPolicy::Reject => Err(err.into()),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::routes::router;
    use crate::routes::test_support::{get, post_json, send};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use points_store::{IdGenerator, InMemoryStore};
    use std::sync::Arc;

    const TARGET_RECEIPT: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    }"#;

    const CORNER_MARKET_RECEIPT: &str = r#"{
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    }"#;

    struct FixedIds(&'static str);

    impl IdGenerator for FixedIds {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    fn app_with(policy: InvalidAmountPolicy) -> Router {
        let mut config = ApiConfig::default();
        config.scoring.invalid_amount = policy;
        router(AppState::from_config(&config))
    }

    fn app() -> Router {
        app_with(InvalidAmountPolicy::Zero)
    }

    async fn submit(app: &Router, body: &str) -> String {
        let (status, json) = send(app, post_json("/receipts/process", body)).await;
        assert_eq!(status, StatusCode::OK, "unexpected body: {}", json);
        let response: ProcessResponse = serde_json::from_value(json).unwrap();
        response.id
    }

    async fn points_for(app: &Router, id: &str) -> Points {
        let (status, json) = send(app, get(&format!("/receipts/{}/points", id))).await;
        assert_eq!(status, StatusCode::OK);
        let response: PointsResponse = serde_json::from_value(json).unwrap();
        response.points
    }

    #[tokio::test]
    async fn test_process_then_lookup() {
        let app = app();

        let target = submit(&app, TARGET_RECEIPT).await;
        let corner = submit(&app, CORNER_MARKET_RECEIPT).await;

        assert_ne!(target, corner);
        assert!(uuid::Uuid::parse_str(&target).is_ok());
        assert_eq!(points_for(&app, &target).await, 28);
        assert_eq!(points_for(&app, &corner).await, 109);
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_zero() {
        let (status, json) = send(&app(), get("/receipts/never-issued/points")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "points": 0 }));
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let body = r#"{ "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "total": "1.00" }"#;
        let (status, json) = send(&app(), post_json("/receipts/process", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "msg": "retailer is required" }));
    }

    #[tokio::test]
    async fn test_empty_required_field() {
        let body = r#"{ "retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "total": "" }"#;
        let (status, json) = send(&app(), post_json("/receipts/process", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "total is required");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, json) = send(&app(), post_json("/receipts/process", "{ not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!json["msg"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_field_type() {
        let body = r#"{ "retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "total": 35.35 }"#;
        let (status, json) = send(&app(), post_json("/receipts/process", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["msg"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(TARGET_RECEIPT))
            .unwrap();
        let (status, json) = send(&app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["msg"].is_string());
    }

    #[tokio::test]
    async fn test_items_are_optional() {
        let app = app();
        let body = r#"{ "retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "14:00", "total": "100.00" }"#;

        let id = submit(&app, body).await;
        // 6 retailer + 6 odd day + 10 afternoon + 75 total
        assert_eq!(points_for(&app, &id).await, 97);
    }

    #[tokio::test]
    async fn test_bad_total_scores_zero_by_default() {
        let app = app();
        let body = TARGET_RECEIPT.replace("\"35.35\"", "\"abc\"");

        let id = submit(&app, &body).await;
        assert_eq!(points_for(&app, &id).await, 0);
    }

    #[tokio::test]
    async fn test_bad_price_rejected_under_reject_policy() {
        let state = AppState::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(FixedIds("fixed")),
            InvalidAmountPolicy::Reject,
        );
        let app = router(state.clone());
        let body = TARGET_RECEIPT.replace("\"12.25\"", "\"twelve\"");

        let (status, json) = send(&app, post_json("/receipts/process", &body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "items[1].price has invalid amount: 'twelve'");
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_bad_price_on_non_qualifying_item_is_ignored() {
        let app = app_with(InvalidAmountPolicy::Reject);
        let body = CORNER_MARKET_RECEIPT.replacen("\"2.25\"", "\"two\"", 1);

        let id = submit(&app, &body).await;
        assert_eq!(points_for(&app, &id).await, 109);
    }

    #[tokio::test]
    async fn test_good_receipt_unaffected_by_reject_policy() {
        let app = app_with(InvalidAmountPolicy::Reject);
        let id = submit(&app, CORNER_MARKET_RECEIPT).await;
        assert_eq!(points_for(&app, &id).await, 109);
    }

    #[tokio::test]
    async fn test_bad_date_only_loses_odd_day_points() {
        let app = app();
        let body = TARGET_RECEIPT.replace("2022-01-01", "Jan 1st");

        let id = submit(&app, &body).await;
        assert_eq!(points_for(&app, &id).await, 22);
    }

    #[tokio::test]
    async fn test_id_collision_is_internal_error() {
        let state = AppState::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(FixedIds("same")),
            InvalidAmountPolicy::Zero,
        );
        let app = router(state);

        assert_eq!(submit(&app, TARGET_RECEIPT).await, "same");

        let (status, json) = send(&app, post_json("/receipts/process", CORNER_MARKET_RECEIPT)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["msg"], "internal error");

        // the first score is untouched
        assert_eq!(points_for(&app, "same").await, 28);
    }
}
