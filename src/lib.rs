//! Employee Server - HTTP CRUD service for employee records
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/      # configuration, state, server lifecycle
//! ├── api/       # HTTP routes and handlers
//! ├── services/  # business rules (email uniqueness, domain errors)
//! ├── db/        # models, conversions, storage adapters
//! └── utils/     # errors, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use crate::services::EmployeeService;
pub use crate::utils::logger::{init_logger, init_logger_with_file};
pub use crate::utils::{AppError, AppResult};

/// Load `.env`, read configuration, and initialize logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
