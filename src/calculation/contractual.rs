//! Contractual employee pay: a flat daily rate per worked day.

use super::rule::{CompensationRule, InputField};

/// Daily rate paid to contractual employees.
pub const CONTRACTUAL_DAILY_RATE: f64 = 500.0;

/// Daily rate times worked days.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractualRule;

impl CompensationRule for ContractualRule {
    fn rule_id(&self) -> &'static str {
        "contractual"
    }

    fn rule_name(&self) -> &'static str {
        "Contractual day rate"
    }

    fn required_input(&self) -> InputField {
        InputField::WorkedDays
    }

    fn compute(&self, worked_days: f64) -> f64 {
        CONTRACTUAL_DAILY_RATE * worked_days
    }

    fn reasoning(&self, worked_days: f64, pay: f64) -> String {
        format!(
            "{} worked days x ${} = ${}",
            worked_days, CONTRACTUAL_DAILY_RATE, pay
        )
    }
}
