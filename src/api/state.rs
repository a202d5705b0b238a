//! Application state for the employee pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{CalculationService, EmployeeTypeRegistry};
use crate::config::AppConfig;
use crate::error::EngineResult;
use crate::store::{EmployeeLookup, EmployeeRepository, InMemoryEmployeeStore};

/// Shared application state.
///
/// The registry is sealed before the state is built, so handlers only ever
/// read it.
#[derive(Clone)]
pub struct AppState {
    calculator: CalculationService,
    employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    /// Creates state over a sealed registry and an employee repository.
    pub fn new<R>(registry: EmployeeTypeRegistry, employees: Arc<R>) -> Self
    where
        R: EmployeeRepository + 'static,
    {
        let lookup: Arc<dyn EmployeeLookup> = employees.clone();
        Self {
            calculator: CalculationService::new(Arc::new(registry), lookup),
            employees,
        }
    }

    /// Builds state with the default rules and an in-memory store seeded
    /// from `config`.
    pub fn from_config(config: &AppConfig) -> EngineResult<Self> {
        let store = InMemoryEmployeeStore::with_employees(config.employees.iter().cloned())?;
        Ok(Self::new(EmployeeTypeRegistry::with_defaults()?, Arc::new(store)))
    }

    /// Returns the calculation service.
    pub fn calculator(&self) -> &CalculationService {
        &self.calculator
    }

    /// Returns the employee repository.
    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.employees.as_ref()
    }
}
