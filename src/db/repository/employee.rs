//! Employee Repository (SQLite)

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::models::Employee;

const EMPLOYEE_SELECT: &str =
    "SELECT id, first_name, last_name, email, department, salary, position FROM employees";

#[derive(Clone)]
pub struct SqliteEmployeeStore {
    pool: SqlitePool,
}

impl SqliteEmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} ORDER BY id");
        let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_department(&self, department: &str) -> RepoResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} WHERE department = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .bind(department)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn insert(&self, employee: Employee) -> RepoResult<Employee> {
        let result = sqlx::query(
            "INSERT INTO employees (first_name, last_name, email, department, salary, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(&employee.position)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
    }

    async fn update(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = employee
            .id
            .ok_or_else(|| RepoError::Validation("Employee id is required for update".into()))?;

        let result = sqlx::query(
            "UPDATE employees SET first_name = ?1, last_name = ?2, email = ?3, department = ?4, salary = ?5, position = ?6 WHERE id = ?7",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(&employee.position)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory SQLite pool with the employees schema applied.
    /// One connection only: each in-memory connection is its own database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn employee(first: &str, last: &str, email: &str, department: &str) -> Employee {
        Employee {
            id: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            salary: 5000.0,
            position: "Software Engineer".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        let a = store
            .insert(employee("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        let b = store
            .insert(employee("Jane", "Roe", "jane@company.com", "Engineering"))
            .await
            .unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(a.first_name, "John");
    }

    #[tokio::test]
    async fn insert_duplicate_email_is_duplicate_error() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        store
            .insert(employee("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        let err = store
            .insert(employee("Johnny", "Doe", "john@company.com", "Sales"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_department_matches_exactly_in_insertion_order() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        store.insert(employee("A", "One", "a@company.com", "Engineering")).await.unwrap();
        store.insert(employee("B", "Two", "b@company.com", "Sales")).await.unwrap();
        store.insert(employee("C", "Three", "c@company.com", "Engineering")).await.unwrap();

        let eng = store.find_by_department("Engineering").await.unwrap();
        assert_eq!(eng.len(), 2);
        assert_eq!(eng[0].first_name, "A");
        assert_eq!(eng[1].first_name, "C");

        // Case-sensitive: "engineering" is a different department
        assert!(store.find_by_department("engineering").await.unwrap().is_empty());
        assert!(store.find_by_department("Marketing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exists_by_email() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        store.insert(employee("John", "Doe", "john@company.com", "Engineering")).await.unwrap();
        assert!(store.exists_by_email("john@company.com").await.unwrap());
        assert!(!store.exists_by_email("jane@company.com").await.unwrap());
    }

    #[tokio::test]
    async fn update_persists_all_fields() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        let mut e = store
            .insert(employee("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        e.department = "Platform".to_string();
        e.salary = 6000.0;
        let updated = store.update(&e).await.unwrap();
        assert_eq!(updated.department, "Platform");
        assert_eq!(updated.salary, 6000.0);

        let fetched = store.find_by_id(e.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched.department, "Platform");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        let mut e = employee("John", "Doe", "john@company.com", "Engineering");
        e.id = Some(99);
        let err = store.update(&e).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        let e = employee("John", "Doe", "john@company.com", "Engineering");
        let err = store.update(&e).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = SqliteEmployeeStore::new(test_pool().await);
        let e = store
            .insert(employee("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        let id = e.id.unwrap();
        assert!(store.delete(id).await.unwrap());
        assert!(store.find_by_id(id).await.unwrap().is_none());
        assert!(!store.delete(id).await.unwrap());
    }
}
