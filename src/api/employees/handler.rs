//! Employee API Handlers
//!
//! Payload validation runs here, before the service is invoked; a failure
//! short-circuits with a 400 carrying the field error list.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{EmployeePayload, EmployeeResponse};
use crate::utils::{AppError, AppResult};

type Payload = Result<Json<EmployeePayload>, JsonRejection>;

/// GET /api/employees - list all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - get one employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee))
}

/// GET /api/employees/department/{department} - exact-match filter
pub async fn by_department(
    State(state): State<ServerState>,
    Path(department): Path<String>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.list_by_department(&department).await?;
    Ok(Json(employees))
}

/// POST /api/employees - create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let Json(payload) = payload?;
    let input = payload.validate().map_err(AppError::Validation)?;
    let employee = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/{id} - update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Payload,
) -> AppResult<Json<EmployeeResponse>> {
    let Json(payload) = payload?;
    let input = payload.validate().map_err(AppError::Validation)?;
    let employee = state.employees.update(id, input).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id} - delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
