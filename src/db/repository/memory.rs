//! In-memory Employee Store
//!
//! Trait twin of [`SqliteEmployeeStore`](super::SqliteEmployeeStore) backed
//! by a plain `Vec`, for tests and embedding without a database file.
//! Mirrors the SQLite behavior: increasing ids, unique emails, insertion
//! order for list operations.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::models::Employee;

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    employees: Vec<Employee>,
    next_id: i64,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.inner.read().employees.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self
            .inner
            .read()
            .employees
            .iter()
            .find(|e| e.id == Some(id))
            .cloned())
    }

    async fn find_by_department(&self, department: &str) -> RepoResult<Vec<Employee>> {
        Ok(self
            .inner
            .read()
            .employees
            .iter()
            .filter(|e| e.department == department)
            .cloned()
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self.inner.read().employees.iter().any(|e| e.email == email))
    }

    async fn insert(&self, mut employee: Employee) -> RepoResult<Employee> {
        let mut inner = self.inner.write();
        if inner.employees.iter().any(|e| e.email == employee.email) {
            return Err(RepoError::Duplicate(format!(
                "UNIQUE constraint failed: employees.email ({})",
                employee.email
            )));
        }
        inner.next_id += 1;
        employee.id = Some(inner.next_id);
        inner.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = employee
            .id
            .ok_or_else(|| RepoError::Validation("Employee id is required for update".into()))?;
        let mut inner = self.inner.write();
        let slot = inner
            .employees
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;
        *slot = employee.clone();
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut inner = self.inner.write();
        let before = inner.employees.len();
        inner.employees.retain(|e| e.id != Some(id));
        Ok(inner.employees.len() < before)
    }
}
