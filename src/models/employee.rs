//! Employee model and related types.
//!
//! This module defines the stored [`Employee`] record, the [`EmployeeType`]
//! codes known out of the box, and the [`NewEmployee`] payload used to
//! create or replace a record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The employee types the service ships rules for.
///
/// Records store the integer [`code`](EmployeeType::code) rather than this
/// enum, so a record may carry a code with no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeType {
    /// Monthly salaried employee, docked for absent days.
    Regular,
    /// Day-rate employee, paid per worked day.
    Contractual,
}

impl EmployeeType {
    /// Returns the integer code stored on employee records.
    pub const fn code(self) -> i32 {
        match self {
            EmployeeType::Regular => 1,
            EmployeeType::Contractual => 2,
        }
    }
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: i32,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's date of birth.
    pub birthdate: NaiveDate,
    /// Tax identification number.
    pub tin: String,
    /// Employee type code, resolved against the rule registry at calculation time.
    pub employee_type_id: i32,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Employee {
    /// Builds an active record from a creation payload.
    pub fn from_new(id: i32, new: NewEmployee) -> Self {
        Self {
            id,
            full_name: new.full_name,
            birthdate: new.birthdate,
            tin: new.tin,
            employee_type_id: new.employee_type_id,
            is_deleted: false,
        }
    }

    /// Overwrites the editable fields with the given payload.
    pub fn apply(&mut self, changes: NewEmployee) {
        self.full_name = changes.full_name;
        self.birthdate = changes.birthdate;
        self.tin = changes.tin;
        self.employee_type_id = changes.employee_type_id;
    }
}

/// The editable fields of an employee, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's full name.
    pub full_name: String,
    /// The employee's date of birth.
    pub birthdate: NaiveDate,
    /// Tax identification number.
    pub tin: String,
    /// Employee type code.
    pub employee_type_id: i32,
}

impl NewEmployee {
    /// Rejects blank names and TINs.
    pub fn validate(&self) -> EngineResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "fullName".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.tin.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "tin".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
