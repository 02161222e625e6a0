use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{"error": message}` body the
/// web client expects. Storage faults never cross the boundary with
/// structured detail: each handler attaches its fixed operation message and
/// the underlying error is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A storage-layer fault, surfaced with a fixed per-operation message.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A request that failed boundary validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    /// Wrap a storage error with the generic message for the failed operation.
    pub fn db(message: &'static str, source: sqlx::Error) -> Self {
        AppError::Database { message, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database { message, source } => {
                tracing::error!(error = %source, "Database error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
