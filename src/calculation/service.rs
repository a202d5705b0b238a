//! Pay calculation orchestration.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, PayResult};
use crate::store::EmployeeLookup;

use super::registry::EmployeeTypeRegistry;

/// Computes pay for stored employees.
///
/// Holds a sealed [`EmployeeTypeRegistry`] and a read-only
/// [`EmployeeLookup`]. Calculation never writes to either, so one service
/// can serve any number of concurrent requests.
#[derive(Clone)]
pub struct CalculationService {
    registry: Arc<EmployeeTypeRegistry>,
    employees: Arc<dyn EmployeeLookup>,
}

impl CalculationService {
    /// Creates a service over the given registry and employee lookup.
    pub fn new(registry: Arc<EmployeeTypeRegistry>, employees: Arc<dyn EmployeeLookup>) -> Self {
        Self {
            registry,
            employees,
        }
    }

    /// The registry rules are resolved from.
    pub fn registry(&self) -> &EmployeeTypeRegistry {
        &self.registry
    }

    /// Computes pay for employee `employee_id`.
    ///
    /// Fails with [`EngineError::EmployeeNotFound`] if no active employee
    /// has that id, [`EngineError::EmployeeTypeNotFound`] if the employee's
    /// type has no rule, and [`EngineError::InvalidInput`] if the rule's
    /// input field is missing or out of range. Lookup errors are returned
    /// unchanged.
    pub async fn calculate(
        &self,
        employee_id: i32,
        input: &CalculationInput,
    ) -> EngineResult<PayResult> {
        let employee = self
            .employees
            .get_employee_by_id(employee_id)
            .await?
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;

        let type_tag = employee.employee_type_id;
        let rule = self.registry.resolve(type_tag)?;
        debug!(employee_id, type_tag, rule_id = rule.rule_id(), "Resolved compensation rule");

        let outcome = rule.apply(input)?;
        info!(employee_id, type_tag, pay = outcome.pay, "Pay calculated");

        Ok(PayResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            employee_id,
            type_tag,
            pay: outcome.pay,
            audit_step: outcome.audit_step,
        })
    }
}
