//! Service Layer

mod employee;

pub use employee::EmployeeService;
