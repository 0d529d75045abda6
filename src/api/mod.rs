//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`employees`] - employee management endpoints

pub mod employees;
pub mod health;

use axum::Router;

use crate::core::ServerState;

/// Assemble all routers into the application
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
}
