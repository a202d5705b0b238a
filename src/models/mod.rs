//! Core data models for the employee pay service.
//!
//! This module contains the domain models used throughout the service.

mod calculation;
mod employee;

pub use calculation::{AuditStep, CalculationInput, PayResult};
pub use employee::{Employee, EmployeeType, NewEmployee};
