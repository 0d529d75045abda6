//! Employee Service
//!
//! Business rules on top of the employee store: email uniqueness on
//! create and update, not-found mapping, entity-to-response conversion.
//!
//! The uniqueness check is a read followed by a separate write; two
//! concurrent requests with the same email can both pass the check, and
//! the loser is stopped by the table's unique constraint instead.

use std::sync::Arc;

use crate::db::models::{EmployeeInput, EmployeeResponse, convert};
use crate::db::repository::EmployeeStore;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// All employees, in storage order
    pub async fn list(&self) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.store.find_all().await?;
        Ok(convert::to_response_list(Some(employees)).unwrap_or_default())
    }

    pub async fn get(&self, id: i64) -> AppResult<EmployeeResponse> {
        let employee = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
        Ok(convert::to_response(employee))
    }

    /// Exact department match; an unknown department is an empty list, not an error
    pub async fn list_by_department(&self, department: &str) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.store.find_by_department(department).await?;
        Ok(convert::to_response_list(Some(employees)).unwrap_or_default())
    }

    pub async fn create(&self, input: EmployeeInput) -> AppResult<EmployeeResponse> {
        if self.store.exists_by_email(&input.email).await? {
            return Err(AppError::conflict(format!("Email '{}'", input.email)));
        }
        let created = self.store.insert(convert::to_entity(input)).await?;
        Ok(convert::to_response(created))
    }

    pub async fn update(&self, id: i64, input: EmployeeInput) -> AppResult<EmployeeResponse> {
        let mut employee = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;

        // Only a changed email is checked; keeping the same email must not
        // collide with the employee's own record.
        if employee.email != input.email && self.store.exists_by_email(&input.email).await? {
            return Err(AppError::conflict(format!("Email '{}'", input.email)));
        }

        convert::apply_input(&mut employee, input);
        let updated = self.store.update(&employee).await?;
        Ok(convert::to_response(updated))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
        self.store.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::InMemoryEmployeeStore;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeStore::new()))
    }

    fn input(first: &str, last: &str, email: &str, department: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            salary: 5000.0,
            position: "Software Engineer".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_response_with_full_name() {
        let svc = service();
        let created = svc
            .create(input("John", "Doe", "john.doe@company.com", "Engineering"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.full_name, "John Doe");
    }

    #[tokio::test]
    async fn create_duplicate_email_is_conflict() {
        let svc = service();
        svc.create(input("John", "Doe", "john@company.com", "Engineering")).await.unwrap();
        let err = svc
            .create(input("Jane", "Roe", "john@company.com", "Sales"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = service().get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_by_department_filters_exactly() {
        let svc = service();
        svc.create(input("A", "One", "a@company.com", "Engineering")).await.unwrap();
        svc.create(input("B", "Two", "b@company.com", "Sales")).await.unwrap();
        svc.create(input("C", "Three", "c@company.com", "Engineering")).await.unwrap();

        let eng = svc.list_by_department("Engineering").await.unwrap();
        assert_eq!(eng.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(svc.list_by_department("Marketing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeping_own_email_never_conflicts() {
        let svc = service();
        let created = svc
            .create(input("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        let updated = svc
            .update(created.id, input("John", "Doe", "john@company.com", "Platform"))
            .await
            .unwrap();
        assert_eq!(updated.department, "Platform");
        assert_eq!(updated.email, "john@company.com");
    }

    #[tokio::test]
    async fn update_email_to_taken_is_conflict() {
        let svc = service();
        svc.create(input("John", "Doe", "john@company.com", "Engineering")).await.unwrap();
        let jane = svc.create(input("Jane", "Roe", "jane@company.com", "Sales")).await.unwrap();

        let err = svc
            .update(jane.id, input("Jane", "Roe", "john@company.com", "Sales"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_email_to_unused_succeeds() {
        let svc = service();
        let created = svc
            .create(input("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        let updated = svc
            .update(created.id, input("John", "Doe", "john.doe@company.com", "Engineering"))
            .await
            .unwrap();
        assert_eq!(updated.email, "john.doe@company.com");
        // Full name recomputed at mapping time
        assert_eq!(updated.full_name, "John Doe");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let err = service()
            .update(42, input("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc
            .create(input("John", "Doe", "john@company.com", "Engineering"))
            .await
            .unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await.unwrap_err(), AppError::NotFound(_)));
        assert!(matches!(svc.delete(created.id).await.unwrap_err(), AppError::NotFound(_)));
    }
}
