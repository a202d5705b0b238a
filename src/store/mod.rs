//! Employee persistence boundary.
//!
//! [`EmployeeLookup`] is the read-only capability the calculation service
//! depends on. [`EmployeeRepository`] adds the writes used by the CRUD
//! endpoints. [`InMemoryEmployeeStore`] implements both.

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Employee, NewEmployee};

pub use memory::InMemoryEmployeeStore;

/// Read access to employee records.
///
/// Soft-deleted records are never returned.
#[async_trait]
pub trait EmployeeLookup: Send + Sync {
    /// Find an active employee by id.
    async fn get_employee_by_id(&self, id: i32) -> EngineResult<Option<Employee>>;
}

/// Full employee persistence.
#[async_trait]
pub trait EmployeeRepository: EmployeeLookup {
    /// All active employees, ordered by id.
    async fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Insert a new employee and return the stored record.
    async fn create_employee(&self, new: NewEmployee) -> EngineResult<Employee>;

    /// Replace the editable fields of an active employee.
    ///
    /// Returns `None` if no active employee has that id.
    async fn update_employee(
        &self,
        id: i32,
        changes: NewEmployee,
    ) -> EngineResult<Option<Employee>>;

    /// Flag an active employee as deleted.
    ///
    /// Returns false if no active employee has that id.
    async fn soft_delete_employee(&self, id: i32) -> EngineResult<bool>;
}
