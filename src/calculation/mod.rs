//! Pay calculation for the employee pay service.
//!
//! This module contains the [`CompensationRule`] abstraction, the Regular
//! and Contractual rules, the [`EmployeeTypeRegistry`] that maps type codes
//! to rules, and the [`CalculationService`] that ties a stored employee to
//! its rule.

mod contractual;
mod registry;
mod regular;
mod rule;
mod service;

pub use contractual::{CONTRACTUAL_DAILY_RATE, ContractualRule};
pub use registry::{EmployeeTypeRegistry, EmployeeTypeRegistryBuilder};
pub use regular::{REGULAR_GROSS_SALARY, REGULAR_TAX_RATE, RegularRule, STANDARD_WORKING_DAYS};
pub use rule::{CompensationRule, InputField, RuleOutcome};
pub use service::CalculationService;
