//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the classweek
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with classweek's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classweek_core::errors::ScheduleError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `ScheduleError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use classweek_api::middleware::error_handling::AppError;
/// use classweek_core::errors::ScheduleError;
///
/// async fn handler(professor_id: i64) -> Result<Json<&'static str>, AppError> {
///     Err(AppError(ScheduleError::NotFound(format!(
///         "Professor with ID {} not found",
///         professor_id
///     ))))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from ScheduleError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, ScheduleError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `ScheduleError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

/// Maps a ScheduleError to an HTTP response
///
/// # Example
///
/// ```ignore
/// match result {
///     Ok(slots) => (StatusCode::OK, Json(slots)).into_response(),
///     Err(err) => map_error(ScheduleError::Database(err)),
/// }
/// ```
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
