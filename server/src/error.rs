use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("PDF rendering failed: {0}")]
    Render(#[from] hugo::RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::RoomNotFound => (StatusCode::NOT_FOUND, "RoomNotFound", self.to_string()),
            Self::Render(_) => {
                tracing::error!("PDF rendering failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RenderError",
                    "PDF rendering failed".to_string(),
                )
            }
            Self::Internal(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
