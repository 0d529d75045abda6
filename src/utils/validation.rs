//! Input validation helpers
//!
//! Centralized text length constants and field-level validation functions.
//! Handlers validate the raw wire payload with these before anything
//! reaches the service layer; failures are collected per field rather than
//! aborting on the first problem.

use serde::Serialize;
use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Names, departments, positions. SQLite TEXT has no built-in enforcement.
pub const MAX_TEXT_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Field errors ────────────────────────────────────────────────────

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a required string: present, non-blank, within the length limit.
/// Returns the owned value on success, records a field error otherwise.
pub fn require_text(
    errors: &mut Vec<FieldError>,
    value: Option<&str>,
    field: &'static str,
    label: &str,
    max_len: usize,
) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            None
        }
        Some(v) if v.len() > max_len => {
            errors.push(FieldError::new(
                field,
                format!("{label} is too long ({} chars, max {max_len})", v.len()),
            ));
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Validate a required email: non-blank, within limits, valid syntax.
pub fn require_email(
    errors: &mut Vec<FieldError>,
    value: Option<&str>,
    field: &'static str,
    label: &str,
) -> Option<String> {
    let email = require_text(errors, value, field, label, MAX_EMAIL_LEN)?;
    if !email.validate_email() {
        errors.push(FieldError::new(field, format!("{label} should be valid")));
        return None;
    }
    Some(email)
}

/// Validate a required, strictly positive number.
pub fn require_positive(
    errors: &mut Vec<FieldError>,
    value: Option<f64>,
    field: &'static str,
    label: &str,
) -> Option<f64> {
    match value {
        None => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            None
        }
        Some(v) if !v.is_finite() || v <= 0.0 => {
            errors.push(FieldError::new(field, format!("{label} must be positive")));
            None
        }
        Some(v) => Some(v),
    }
}
