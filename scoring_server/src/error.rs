use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use risk_model::ValidationError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no route for {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "VALIDATION_ERROR",
                    "message": "request body failed validation",
                    "details": err.errors,
                }),
            ),
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "NOT_FOUND",
                    "message": format!("no route for {}", path),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
