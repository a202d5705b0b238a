//! HTTP request handlers for the employee pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::NewEmployee;

use super::request::{CalculationRequest, EmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, EmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/api/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/api/employees/:id/calculate", post(calculate_handler))
        .with_state(state)
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field name
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

/// Logs an engine error and converts it to a response.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Validates a create/edit payload and converts it to the domain type.
fn to_new_employee(request: EmployeeRequest) -> Result<NewEmployee, EngineError> {
    let new: NewEmployee = request.into();
    new.validate()?;
    Ok(new)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for GET /api/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.employees().list_employees().await {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                count = employees.len(),
                "Listed employees"
            );
            let body: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();
            Json(body).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /api/employees/:id.
async fn get_employee_handler(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.employees().get_employee_by_id(id).await {
        Ok(Some(employee)) => Json(EmployeeResponse::from(employee)).into_response(),
        Ok(None) => engine_error_response(EngineError::EmployeeNotFound { id }, correlation_id),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /api/employees.
///
/// Responds 201 with a `Location` header and the new id as the body.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let new = match to_new_employee(request) {
        Ok(new) => new,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    match state.employees().create_employee(new).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                "Employee created"
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, format!("/api/employees/{}", employee.id))],
                Json(employee.id),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for PUT /api/employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    if let Some(body_id) = request.id.filter(|body_id| *body_id != id) {
        warn!(
            correlation_id = %correlation_id,
            path_id = id,
            body_id,
            "Employee id mismatch"
        );
        return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "Body id {} does not match path id {}",
            body_id, id
        )))
        .into_response();
    }

    let changes = match to_new_employee(request) {
        Ok(changes) => changes,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    match state.employees().update_employee(id, changes).await {
        Ok(Some(employee)) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
            Json(EmployeeResponse::from(employee)).into_response()
        }
        Ok(None) => engine_error_response(EngineError::EmployeeNotFound { id }, correlation_id),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for DELETE /api/employees/:id.
///
/// Soft-deletes the employee and echoes the id.
async fn delete_employee_handler(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.employees().soft_delete_employee(id).await {
        Ok(true) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Employee deleted");
            Json(id).into_response()
        }
        Ok(false) => engine_error_response(EngineError::EmployeeNotFound { id }, correlation_id),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /api/employees/:id/calculate.
///
/// Accepts `{ "absentDays"?: number, "workedDays"?: number }` and returns
/// the computed pay.
async fn calculate_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing calculation request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.calculator().calculate(id, &input).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                type_tag = result.type_tag,
                pay = result.pay,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed successfully"
            );
            Json(result).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}
