use avalon_core::error::CoreError;
use avalon_db::StoreError;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// HTML handlers wrap it in a [`PageError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `avalon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A multi-step store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error to an HTTP status, a stable error code, and a message
    /// safe to show to users. Internal details are logged, never returned.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
            AppError::Store(err @ StoreError::Contended { .. }) => {
                tracing::warn!(error = %err, "Contended state write");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "The game was changed by someone else, please retry".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
            StatusCode::CONFLICT,
            "CONFLICT",
            "Duplicate value violates a unique constraint".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

// ---------------------------------------------------------------------------
// HTML boundary
// ---------------------------------------------------------------------------

/// An [`AppError`] raised by an HTML handler.
///
/// Renders as a flash page: the error's HTTP status, a `Location` header
/// pointing where the user should go next, and a small HTML body with the
/// message and a link there.
#[derive(Debug)]
pub struct PageError {
    pub error: AppError,
    pub location: String,
}

impl PageError {
    pub fn new(error: impl Into<AppError>, location: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            location: location.into(),
        }
    }
}

/// Convenience type alias for HTML handler return values.
pub type PageResult<T> = Result<T, PageError>;

/// Attach a flash redirect target to any fallible result.
pub trait FlashExt<T> {
    fn or_flash(self, location: &str) -> PageResult<T>;
}

impl<T, E: Into<AppError>> FlashExt<T> for Result<T, E> {
    fn or_flash(self, location: &str) -> PageResult<T> {
        self.map_err(|e| PageError::new(e, location))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.error.classify();
        tracing::debug!(%status, code, location = %self.location, "Rendering flash page");

        let body = views::flash_page(&message, "danger", &self.location);
        match header::HeaderValue::from_str(&self.location) {
            Ok(location) => (status, [(header::LOCATION, location)], Html(body)).into_response(),
            Err(_) => (status, Html(body)).into_response(),
        }
    }
}
