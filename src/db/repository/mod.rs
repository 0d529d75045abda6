//! Repository Module
//!
//! Storage adapter for employee records. The service layer depends only on
//! the [`EmployeeStore`] trait; [`SqliteEmployeeStore`] backs production,
//! [`InMemoryEmployeeStore`] backs tests.

pub mod employee;
pub mod memory;

pub use employee::SqliteEmployeeStore;
pub use memory::InMemoryEmployeeStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::Employee;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee storage operations
///
/// All list operations return rows in insertion (id) order.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;
    /// Exact department match; unknown departments yield an empty list
    async fn find_by_department(&self, department: &str) -> RepoResult<Vec<Employee>>;
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool>;
    /// Persist a new employee and return it with the assigned identifier
    async fn insert(&self, employee: Employee) -> RepoResult<Employee>;
    /// Persist all mutable fields of an existing employee by id
    async fn update(&self, employee: &Employee) -> RepoResult<Employee>;
    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
