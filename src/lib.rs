//! Employee records API with per-type pay calculation.
//!
//! This crate manages employee records and computes pay for each employee
//! from a compensation rule selected by the employee's type code.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;
