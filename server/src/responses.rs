use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// JSON error body shared by the API handlers.
pub(crate) struct Error {
    status_code: StatusCode,
    message: String,
}

impl Error {
    pub(crate) fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub(crate) fn internal(cause: impl std::fmt::Display) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            message: cause.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (
            self.status_code,
            [("content-type", "application/json")],
            Json(json!({
                "message": self.message,
            })),
        )
            .into_response()
    }
}
