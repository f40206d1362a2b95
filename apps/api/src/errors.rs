use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gateway::GatewayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// A failed call never tears down the process and never overwrites session
/// state: controllers keep their prior state and surface one of these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A request is already in flight for this action")]
    RequestInFlight,

    #[error("The request was superseded by a newer action")]
    Superseded,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::RequestInFlight => (
                StatusCode::CONFLICT,
                "REQUEST_IN_FLIGHT",
                "Another request is still running — wait for it to finish".to_string(),
            ),
            AppError::Superseded => (
                StatusCode::CONFLICT,
                "SUPERSEDED",
                "This request was superseded by a newer action".to_string(),
            ),
            AppError::Gateway(GatewayError::CvAnalysisFailed(e)) => {
                tracing::error!("CV analysis schema failure: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CV_ANALYSIS_FAILED",
                    "Failed to analyze CV content.".to_string(),
                )
            }
            AppError::Gateway(GatewayError::Provider(e)) => {
                tracing::error!("Provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "The AI provider call failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
