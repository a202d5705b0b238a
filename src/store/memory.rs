//! In-memory employee store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewEmployee};

use super::{EmployeeLookup, EmployeeRepository};

/// Employee records held in a `BTreeMap` keyed by id.
///
/// New ids are one past the highest id ever stored, so soft-deleted ids are
/// never reused.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<BTreeMap<i32, Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `seed`.
    ///
    /// Fails with [`EngineError::Storage`] if two records share an id.
    pub fn with_employees(seed: impl IntoIterator<Item = Employee>) -> EngineResult<Self> {
        let mut employees = BTreeMap::new();
        for employee in seed {
            let id = employee.id;
            if employees.insert(id, employee).is_some() {
                return Err(EngineError::Storage {
                    message: format!("duplicate employee id {}", id),
                });
            }
        }
        Ok(Self {
            employees: RwLock::new(employees),
        })
    }
}

#[async_trait]
impl EmployeeLookup for InMemoryEmployeeStore {
    async fn get_employee_by_id(&self, id: i32) -> EngineResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).filter(|e| !e.is_deleted).cloned())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeStore {
    async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().filter(|e| !e.is_deleted).cloned().collect())
    }

    async fn create_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        let mut employees = self.employees.write().await;
        let id = employees
            .last_key_value()
            .map_or(Ok(1), |(last, _)| {
                last.checked_add(1).ok_or_else(|| EngineError::Storage {
                    message: "employee id space exhausted".to_string(),
                })
            })?;

        let employee = Employee::from_new(id, new);
        employees.insert(id, employee.clone());
        debug!(employee_id = id, "Employee created");
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: i32,
        changes: NewEmployee,
    ) -> EngineResult<Option<Employee>> {
        let mut employees = self.employees.write().await;
        let Some(employee) = employees.get_mut(&id).filter(|e| !e.is_deleted) else {
            return Ok(None);
        };
        employee.apply(changes);
        debug!(employee_id = id, "Employee updated");
        Ok(Some(employee.clone()))
    }

    async fn soft_delete_employee(&self, id: i32) -> EngineResult<bool> {
        let mut employees = self.employees.write().await;
        match employees.get_mut(&id).filter(|e| !e.is_deleted) {
            Some(employee) => {
                employee.is_deleted = true;
                debug!(employee_id = id, "Employee soft-deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
