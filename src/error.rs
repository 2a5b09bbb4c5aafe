//! Application error taxonomy and the structured error body sent to clients.
//!
//! Handlers and services return [`AppError`]; the error translator middleware
//! ([`crate::api::middleware::error_translator`]) is the only place that turns
//! an error into an HTTP status and an [`ErrorResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

/// Wire format for the error response timestamp: ISO-8601 with millisecond
/// precision and an explicit UTC offset, e.g. `2026-08-30T12:00:00.000+00:00`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Classified application failure.
///
/// The message is for logs only and never reaches the client; the client sees
/// the per-kind label via [`AppError::label`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short error label included in the response body.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Not exist user",
            Self::BadRequest { .. } => "Bad Request",
            Self::Conflict { .. } => "Conflict",
            Self::Internal { .. } => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    /// Produces a bodyless response carrying the error in its extensions.
    ///
    /// The error translator middleware reads the extension and builds the
    /// [`ErrorResponse`] body; it needs the request path, which is not known
    /// here.
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(format!(
                "unique constraint violation: {}",
                db.constraint().unwrap_or("unknown")
            ));
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("database error")
    }
}

/// Structured error body returned for every failed request.
///
/// ```json
/// {
///   "timestamp": "2026-08-30T07:28:34.039+00:00",
///   "status": 404,
///   "error": "Not exist user",
///   "path": "/users/999"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub path: String,
}

impl ErrorResponse {
    /// Builds an error body stamped with the current UTC time.
    pub fn new(status: StatusCode, error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            status: status.as_u16(),
            error: error.into(),
            path: path.into(),
        }
    }
}
