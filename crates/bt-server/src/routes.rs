//! HTTP routes exposing the attendance engine.
//!
//! Each request is one independent engine invocation; the router carries no
//! shared state. CORS is permissive because the expected caller is a
//! browser client on another origin.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bt_core::{AttendanceSummary, calculate_day};

use crate::error::ApiError;

/// Request body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Raw tab-delimited badge-log text for one employee-day.
    pub logs: String,
}

/// Builds the service router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/calculate", post(calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Badge-log attendance engine",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /calculate": "Compute an attendance summary from raw badge-log text",
            "GET /health": "Health check",
        },
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn calculate(
    Json(request): Json<CalculateRequest>,
) -> Result<Json<AttendanceSummary>, ApiError> {
    let summary = calculate_day(&request.logs)?;
    tracing::debug!(
        employee_id = %summary.employee_id,
        status = %summary.status,
        "calculated attendance summary"
    );
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const SAMPLE_LOG: &str = "\
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 09:00:00\tLD CHN-1 (ASC) IN - 1\tEntry Granted\n\
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 17:30:00\tLD CHN-1 (ASC) OUT - 1\tExit Granted";

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_calculate(logs: &str) -> Request<Body> {
        let body = serde_json::to_string(&CalculateRequest {
            logs: logs.to_string(),
        })
        .unwrap();
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert!(value["endpoints"].get("POST /calculate").is_some());
    }

    #[tokio::test]
    async fn calculate_returns_summary() {
        let response = router().oneshot(post_calculate(SAMPLE_LOG)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["employee_id"], "104138");
        assert_eq!(value["status"], "completed");
        assert_eq!(value["net_in_office_seconds"], 30_600);
        assert_eq!(value["required_seconds_for_8_hours"], 0);
        assert!(value.get("expected_logout").is_none());
    }

    #[tokio::test]
    async fn calculate_rejects_bad_input_with_detail() {
        let response = router()
            .oneshot(post_calculate("not a badge log"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = body_json(response).await;
        assert!(
            value["detail"]
                .as_str()
                .unwrap()
                .contains("malformed record on line 1")
        );
    }

    #[tokio::test]
    async fn calculate_rejects_empty_logs() {
        let response = router().oneshot(post_calculate("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = body_json(response).await;
        assert_eq!(
            value["detail"],
            "no valid log records found in input"
        );
    }
}
