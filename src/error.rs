use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// The primary error type for the application.
///
/// Every failure a handler can produce maps onto one of these variants,
/// which in turn map onto the API's `{status, message}` response envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Internal server errors that are not expected to be handled by the client.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
    /// Client errors due to invalid or malformed request fields.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// The request lacks a valid bearer token (missing, invalid or expired).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The caller is authenticated but does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// A requested resource does not exist (or is soft-deleted).
    #[error("Not found: {0}")]
    NotFound(String),
    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(String),
    /// The service is temporarily unavailable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // All responses use the `{status: false, message: ...}` envelope.
        // Internal and database failures never expose the raw error text;
        // it is logged under a generated error_id instead.
        let (status, message, details) = match self {
            AppError::Internal(e) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!(%error_id, "Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    Some(json!({ "error_id": error_id.to_string() })),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Database(msg) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!(%error_id, "Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                    Some(json!({ "error_id": error_id.to_string() })),
                )
            }
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, None),
        };

        let mut body = json!({
            "status": false,
            "message": message,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
            sqlx::Error::PoolTimedOut => {
                AppError::ServiceUnavailable("Database connection pool timed out".to_string())
            }
            _ => AppError::Database(format!("Database error: {}", err)),
        }
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;

/// An extension trait for `Option` that provides a convenient way to convert
/// an `Option` to a `Result` with a `NotFound` error.
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}
