//! Regular employee pay.
//!
//! Regular employees earn a fixed monthly gross salary, docked by a per-day
//! rate for each absent day. The per-day rate is the after-tax salary spread
//! over a standard working month.
//!
//! No floor is applied: enough absences drive pay below zero.

use super::rule::{CompensationRule, InputField};

/// Monthly gross salary.
pub const REGULAR_GROSS_SALARY: f64 = 20000.0;

/// Tax rate withheld from the gross salary when deriving the per-day rate.
pub const REGULAR_TAX_RATE: f64 = 0.12;

/// Standard working days in a month.
pub const STANDARD_WORKING_DAYS: f64 = 22.0;

/// Salary less a per-day deduction for absences.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularRule;

impl RegularRule {
    /// The amount deducted for each absent day.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_pay::calculation::RegularRule;
    ///
    /// assert_eq!(RegularRule::per_day_rate(), 800.0);
    /// ```
    pub fn per_day_rate() -> f64 {
        let tax = REGULAR_GROSS_SALARY * REGULAR_TAX_RATE;
        (REGULAR_GROSS_SALARY - tax) / STANDARD_WORKING_DAYS
    }
}

impl CompensationRule for RegularRule {
    fn rule_id(&self) -> &'static str {
        "regular"
    }

    fn rule_name(&self) -> &'static str {
        "Regular monthly salary"
    }

    fn required_input(&self) -> InputField {
        InputField::AbsentDays
    }

    fn compute(&self, absent_days: f64) -> f64 {
        let deduction = Self::per_day_rate() * absent_days;
        REGULAR_GROSS_SALARY - deduction
    }

    fn reasoning(&self, absent_days: f64, pay: f64) -> String {
        format!(
            "${} - (${} x {} absent days) = ${}",
            REGULAR_GROSS_SALARY,
            Self::per_day_rate(),
            absent_days,
            pay
        )
    }
}
