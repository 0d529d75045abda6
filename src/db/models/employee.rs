//! Employee Model

use serde::{Deserialize, Serialize};

use crate::utils::validation::{
    FieldError, MAX_TEXT_LEN, require_email, require_positive, require_text,
};

/// Employee entity matching the `employees` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// Assigned by storage on insert; `None` until persisted
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub position: String,
}

/// Create/update employee payload as received on the wire
///
/// Every field is optional so that missing or null fields surface as
/// field errors from [`EmployeePayload::validate`] instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub position: Option<String>,
}

/// Validated employee input: every field present and well-formed
#[derive(Debug, Clone)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub position: String,
}

/// Employee response with the derived full name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub position: String,
    pub full_name: String,
}

impl EmployeePayload {
    /// Check every field constraint and build the internal input
    /// representation. All failures are collected, not just the first.
    pub fn validate(&self) -> Result<EmployeeInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = require_text(
            &mut errors,
            self.first_name.as_deref(),
            "firstName",
            "First name",
            MAX_TEXT_LEN,
        );
        let last_name = require_text(
            &mut errors,
            self.last_name.as_deref(),
            "lastName",
            "Last name",
            MAX_TEXT_LEN,
        );
        let email = require_email(&mut errors, self.email.as_deref(), "email", "Email");
        let department = require_text(
            &mut errors,
            self.department.as_deref(),
            "department",
            "Department",
            MAX_TEXT_LEN,
        );
        let salary = require_positive(&mut errors, self.salary, "salary", "Salary");
        let position = require_text(
            &mut errors,
            self.position.as_deref(),
            "position",
            "Position",
            MAX_TEXT_LEN,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EmployeeInput {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            department: department.unwrap_or_default(),
            salary: salary.unwrap_or_default(),
            position: position.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("john.doe@company.com".into()),
            department: Some("Engineering".into()),
            salary: Some(5000.0),
            position: Some("Software Engineer".into()),
        }
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let input = payload().validate().unwrap();
        assert_eq!(input.first_name, "John");
        assert_eq!(input.email, "john.doe@company.com");
        assert_eq!(input.salary, 5000.0);
    }

    #[test]
    fn validate_collects_all_field_errors() {
        let errors = EmployeePayload::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["firstName", "lastName", "email", "department", "salary", "position"]
        );
    }

    #[test]
    fn validate_rejects_blank_first_name() {
        let mut p = payload();
        p.first_name = Some("  ".into());
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "firstName");
        assert_eq!(errors[0].message, "First name is required");
    }

    #[test]
    fn validate_rejects_bad_email_syntax() {
        let mut p = payload();
        p.email = Some("john.doe-at-company".into());
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email should be valid");
    }

    #[test]
    fn validate_rejects_non_positive_salary() {
        let mut p = payload();
        p.salary = Some(-1.0);
        let errors = p.validate().unwrap_err();
        assert_eq!(errors[0].message, "Salary must be positive");

        p.salary = Some(0.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn payload_deserializes_camel_case() {
        let p: EmployeePayload = serde_json::from_str(
            r#"{"firstName":"John","lastName":"Doe","email":"john.doe@company.com",
                "department":"Engineering","salary":5000.00,"position":"Software Engineer"}"#,
        )
        .unwrap();
        assert_eq!(p.first_name.as_deref(), Some("John"));
        assert!(p.validate().is_ok());
    }
}
