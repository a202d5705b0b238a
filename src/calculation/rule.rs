//! The compensation rule abstraction.
//!
//! A [`CompensationRule`] turns one validated day count into a pay amount.
//! Each employee type registers its own rule, so adding a type means adding
//! a rule rather than editing a dispatch site.

use std::fmt;

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CalculationInput};

/// The input field a rule consumes from a [`CalculationInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// `absentDays`
    AbsentDays,
    /// `workedDays`
    WorkedDays,
}

impl InputField {
    /// The field name as it appears in request payloads.
    pub const fn wire_name(self) -> &'static str {
        match self {
            InputField::AbsentDays => "absentDays",
            InputField::WorkedDays => "workedDays",
        }
    }

    /// Reads and validates this field from the input.
    ///
    /// The value must be present, a JSON number, and not negative. Only
    /// this field is inspected; other fields may hold anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_pay::calculation::InputField;
    /// use employee_pay::models::CalculationInput;
    ///
    /// let input = CalculationInput::absent(2.0);
    /// assert_eq!(InputField::AbsentDays.extract(&input).unwrap(), 2.0);
    /// assert!(InputField::WorkedDays.extract(&input).is_err());
    /// ```
    pub fn extract(self, input: &CalculationInput) -> EngineResult<f64> {
        let raw = match self {
            InputField::AbsentDays => input.absent_days.as_ref(),
            InputField::WorkedDays => input.worked_days.as_ref(),
        };

        let value = match raw {
            None | Some(Value::Null) => return Err(self.invalid("is required")),
            Some(raw) => raw
                .as_f64()
                .ok_or_else(|| self.invalid("must be a number"))?,
        };
        if value < 0.0 {
            return Err(self.invalid("must not be negative"));
        }
        Ok(value)
    }

    fn invalid(self, message: &str) -> EngineError {
        EngineError::InvalidInput {
            field: self.wire_name().to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Result of applying a rule to a calculation input.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// The computed pay amount.
    pub pay: f64,
    /// The audit step documenting this rule application.
    pub audit_step: AuditStep,
}

/// Pay computation for one employee type.
///
/// Implementations are stateless; `compute` must be a pure function of its
/// argument so a registry can hand the same rule to any number of
/// concurrent requests.
pub trait CompensationRule: Send + Sync + fmt::Debug {
    /// Stable identifier used in audit output (e.g. `"regular"`).
    fn rule_id(&self) -> &'static str;

    /// Human-readable rule name.
    fn rule_name(&self) -> &'static str;

    /// The input field this rule consumes.
    fn required_input(&self) -> InputField;

    /// Computes pay from an already-validated quantity.
    fn compute(&self, quantity: f64) -> f64;

    /// Explains how `pay` was derived from `quantity`.
    fn reasoning(&self, quantity: f64, pay: f64) -> String;

    /// Validates the required input field, computes pay and records the step.
    ///
    /// A quantity large enough to overflow the pay to infinity is rejected
    /// as invalid input rather than returned.
    fn apply(&self, input: &CalculationInput) -> EngineResult<RuleOutcome> {
        let field = self.required_input();
        let quantity = field.extract(input)?;
        let pay = self.compute(quantity);
        if !pay.is_finite() {
            return Err(field.invalid("is too large"));
        }

        let audit_step = AuditStep {
            rule_id: self.rule_id().to_string(),
            rule_name: self.rule_name().to_string(),
            input: serde_json::json!({ field.wire_name(): quantity }),
            output: serde_json::json!({ "pay": pay }),
            reasoning: self.reasoning(quantity, pay),
        };

        Ok(RuleOutcome { pay, audit_step })
    }
}
