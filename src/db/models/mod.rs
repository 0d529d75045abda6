//! Database Models

pub mod convert;
mod employee;

pub use employee::{Employee, EmployeeInput, EmployeePayload, EmployeeResponse};
