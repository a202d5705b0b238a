//! Request types for the employee pay API.
//!
//! This module defines the JSON request bodies for the `/api/employees`
//! endpoints. Field names are camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, NewEmployee};

/// Request body for `POST /api/employees/:id/calculate`.
pub type CalculationRequest = CalculationInput;

/// Request body for creating or editing an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Must match the path id when present on an edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's date of birth (`yyyy-MM-dd`).
    pub birthdate: NaiveDate,
    /// Tax identification number.
    pub tin: String,
    /// Employee type code.
    pub type_id: i32,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            full_name: req.full_name,
            birthdate: req.birthdate,
            tin: req.tin,
            employee_type_id: req.type_id,
        }
    }
}
