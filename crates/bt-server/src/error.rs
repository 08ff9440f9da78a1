//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use bt_core::EngineError;

/// Errors surfaced to HTTP clients.
///
/// Engine failures are client errors: the input text was unusable. The
/// engine's message is forwarded verbatim in the `detail` field so the
/// client can show it to the user unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Engine(err) => {
                tracing::warn!(error = %err, "calculation rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_bad_request() {
        let response = ApiError::from(EngineError::EmptyInput).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
