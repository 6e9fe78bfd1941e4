use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use crate::errors::AppError;

// Every error leaves as {"detail": "..."} with the status picked by its kind.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::WriteDenied(_) | AppError::Internal(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match &self {
            AppError::NotFound(msg) => tracing::warn!("{}", msg),
            _ => tracing::error!("Request failed: {}", self),
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
