//! Entity/DTO conversions
//!
//! Pure translation between the persisted [`Employee`] entity and the wire
//! shapes. The derived full name is computed here, once, at mapping time.

use super::{Employee, EmployeeInput, EmployeeResponse};

fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

/// entity → response
pub fn to_response(e: Employee) -> EmployeeResponse {
    let full_name = full_name(&e.first_name, &e.last_name);
    EmployeeResponse {
        id: e.id.unwrap_or_default(),
        first_name: e.first_name,
        last_name: e.last_name,
        email: e.email,
        department: e.department,
        salary: e.salary,
        position: e.position,
        full_name,
    }
}

/// input → new entity; the identifier is assigned by storage on insert
pub fn to_entity(input: EmployeeInput) -> Employee {
    Employee {
        id: None,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        department: input.department,
        salary: input.salary,
        position: input.position,
    }
}

/// Overwrite all mutable fields of an existing entity; the identifier is kept
pub fn apply_input(e: &mut Employee, input: EmployeeInput) {
    e.first_name = input.first_name;
    e.last_name = input.last_name;
    e.email = input.email;
    e.department = input.department;
    e.salary = input.salary;
    e.position = input.position;
}

/// Element-wise entity → response, preserving order.
/// An absent input list maps to an absent output list, not an empty one.
pub fn to_response_list(employees: Option<Vec<Employee>>) -> Option<Vec<EmployeeResponse>> {
    employees.map(|list| list.into_iter().map(to_response).collect())
}
