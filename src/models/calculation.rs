//! Calculation input and result models.
//!
//! [`CalculationInput`] is the raw payload a caller supplies; each
//! compensation rule reads only the field it needs. [`PayResult`] is what a
//! successful calculation returns, including an [`AuditStep`] describing
//! how the amount was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The raw inputs a caller may supply for a pay calculation.
///
/// Values are kept as raw JSON so that a malformed field only fails the
/// request when the resolved rule reads it. Fields irrelevant to the
/// employee's type are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Days absent in the period, read by the Regular rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_days: Option<serde_json::Value>,
    /// Days worked in the period, read by the Contractual rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worked_days: Option<serde_json::Value>,
}

impl CalculationInput {
    /// Input carrying only an absent-day count.
    pub fn absent(days: f64) -> Self {
        Self {
            absent_days: Some(days.into()),
            worked_days: None,
        }
    }

    /// Input carrying only a worked-day count.
    pub fn worked(days: f64) -> Self {
        Self {
            absent_days: None,
            worked_days: Some(days.into()),
        }
    }
}

/// A record of one rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the computation.
    pub reasoning: String,
}

/// The outcome of a successful pay calculation.
///
/// # Example
///
/// ```
/// use employee_pay::models::{AuditStep, PayResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = PayResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     employee_id: 2,
///     type_tag: 2,
///     pay: 5000.0,
///     audit_step: AuditStep {
///         rule_id: "contractual".to_string(),
///         rule_name: "Contractual day rate".to_string(),
///         input: serde_json::json!({ "workedDays": 10.0 }),
///         output: serde_json::json!({ "pay": 5000.0 }),
///         reasoning: "10 days x 500 = 5000".to_string(),
///     },
/// };
/// assert_eq!(result.pay, 5000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// The employee the pay was computed for.
    pub employee_id: i32,
    /// The type tag that selected the rule.
    pub type_tag: i32,
    /// The computed pay amount.
    pub pay: f64,
    /// How the amount was computed.
    pub audit_step: AuditStep,
}
