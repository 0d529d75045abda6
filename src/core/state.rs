use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::SqliteEmployeeStore;
use crate::services::EmployeeService;
use crate::utils::AppError;

/// Shared server state, cloned cheaply into every handler
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool (health probes)
    pub pool: SqlitePool,
    /// Employee service
    pub employees: EmployeeService,
}

impl ServerState {
    /// Build state from an existing pool (tests construct their own)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let store = Arc::new(SqliteEmployeeStore::new(pool.clone()));
        Self {
            config,
            pool,
            employees: EmployeeService::new(store),
        }
    }

    /// Open the database from config and build the full state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.db_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }
}
