//! HTTP API module for the employee pay service.
//!
//! This module provides the REST endpoints for managing employee records
//! and calculating pay.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, EmployeeResponse};
pub use state::AppState;
