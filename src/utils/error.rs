//! Unified Error Handling
//!
//! Provides application-wide error types and response structures.
//!
//! # Error code reference
//!
//! | Code | Category | Status |
//! |------|----------|--------|
//! | E0002 | Validation failed | 400 |
//! | E0003 | Resource not found | 404 |
//! | E0004 | Resource conflict | 409 |
//! | E0006 | Invalid request | 400 |
//! | E9001 | Internal error | 500 |
//! | E9002 | Database error | 500 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;
use crate::utils::validation::FieldError;

/// Unified API response structure, used for all error bodies.
///
/// ```json
/// {
///   "code": "E0002",
///   "message": "Validation failed",
///   "errors": [{ "field": "firstName", "message": "First name is required" }]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field-level details, present on validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business Logic Errors ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    // ========== System Errors ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Invalid request: {0}")]
    Invalid(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None),

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg, None),

            // Validation (400) — carries the per-field detail list
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "E0002",
                "Validation failed".to_string(),
                Some(errors),
            ),

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg, None),

            // Database errors (500) — detail stays in the server log
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                    None,
                )
            }

            // Internal errors (500) — detail stays in the server log
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message,
            data: None,
            errors,
        });

        (status, body).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    /// `not_found("Employee 7")` → "Employee 7 not found"
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// `conflict("Email 'a@b'")` → "Email 'a@b' already in use"
    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict(format!("{} already in use", resource.into()))
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

// ========== Conversions from other error types ==========

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Invalid(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Invalid(format!("Invalid request body: {}", e.body_text()))
    }
}
