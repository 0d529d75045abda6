//! Server-level errors

use crate::utils::AppError;

/// Errors raised while starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Startup error: {0}")]
    Startup(#[from] AppError),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
