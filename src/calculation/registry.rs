//! Employee type registry.
//!
//! Maps employee type codes to the [`CompensationRule`] that pays them.
//! Rules are registered on an [`EmployeeTypeRegistryBuilder`] at startup;
//! [`build`](EmployeeTypeRegistryBuilder::build) seals the mapping into an
//! [`EmployeeTypeRegistry`], which has no mutating methods and can be shared
//! across request handlers behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeType;

use super::contractual::ContractualRule;
use super::regular::RegularRule;
use super::rule::CompensationRule;

/// Collects rule registrations before the registry is sealed.
#[derive(Debug, Default)]
pub struct EmployeeTypeRegistryBuilder {
    rules: HashMap<i32, Arc<dyn CompensationRule>>,
}

impl EmployeeTypeRegistryBuilder {
    /// Registers `rule` for `type_id`.
    ///
    /// Returns [`EngineError::DuplicateEmployeeType`] if a rule is already
    /// registered for that code; the existing rule is kept.
    pub fn register(
        mut self,
        type_id: i32,
        rule: impl CompensationRule + 'static,
    ) -> EngineResult<Self> {
        if self.rules.contains_key(&type_id) {
            return Err(EngineError::DuplicateEmployeeType { type_id });
        }
        debug!(type_id, rule_id = rule.rule_id(), "Registered compensation rule");
        self.rules.insert(type_id, Arc::new(rule));
        Ok(self)
    }

    /// Seals the registry.
    pub fn build(self) -> EmployeeTypeRegistry {
        EmployeeTypeRegistry { rules: self.rules }
    }
}

/// A sealed, read-only mapping from type code to compensation rule.
///
/// # Example
///
/// ```
/// use employee_pay::calculation::{ContractualRule, EmployeeTypeRegistry};
///
/// let registry = EmployeeTypeRegistry::builder()
///     .register(2, ContractualRule)?
///     .build();
///
/// assert_eq!(registry.resolve(2)?.rule_id(), "contractual");
/// assert!(registry.resolve(1).is_err());
/// # Ok::<(), employee_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeTypeRegistry {
    rules: HashMap<i32, Arc<dyn CompensationRule>>,
}

impl EmployeeTypeRegistry {
    /// Starts an empty registry builder.
    pub fn builder() -> EmployeeTypeRegistryBuilder {
        EmployeeTypeRegistryBuilder::default()
    }

    /// A registry with the Regular and Contractual rules registered under
    /// their standard codes.
    pub fn with_defaults() -> EngineResult<Self> {
        Ok(Self::builder()
            .register(EmployeeType::Regular.code(), RegularRule)?
            .register(EmployeeType::Contractual.code(), ContractualRule)?
            .build())
    }

    /// Looks up the rule for `type_id`.
    ///
    /// There is no fallback rule: an unregistered code fails with
    /// [`EngineError::EmployeeTypeNotFound`].
    pub fn resolve(&self, type_id: i32) -> EngineResult<&dyn CompensationRule> {
        self.rules
            .get(&type_id)
            .map(|rule| rule.as_ref())
            .ok_or(EngineError::EmployeeTypeNotFound { type_id })
    }

    /// Returns true if a rule is registered for `type_id`.
    pub fn contains(&self, type_id: i32) -> bool {
        self.rules.contains_key(&type_id)
    }

    /// Registered type codes in ascending order.
    pub fn type_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.rules.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
