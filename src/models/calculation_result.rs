//! Calculation result model for the Attendance Engine.
//!
//! This module contains the [`SalaryCalculationResult`] type that captures
//! the output of a salary calculation: the day counts it was derived from
//! plus the computed gross and net salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a salary calculation.
///
/// The day counts are carried through from the calculation's inputs
/// unchanged so the result is self-describing for display. The result is a
/// transient projection: it holds no identity and is always derivable from
/// the (wage, attendance snapshot) pair it was computed from.
///
/// `gross_salary` and `net_salary` are kept as two distinct fields even
/// though no deductions currently apply and they are always equal.
///
/// # Example
///
/// ```
/// use attendance_engine::models::SalaryCalculationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = SalaryCalculationResult {
///     total_days: 20,
///     absent_days: 2,
///     double_days: 3,
///     gross_salary: Decimal::from_str("10500").unwrap(),
///     net_salary: Decimal::from_str("10500").unwrap(),
/// };
/// assert_eq!(result.gross_salary, result.net_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculationResult {
    /// Count of days with status other than holiday.
    pub total_days: u32,
    /// Count of days with status absent.
    pub absent_days: u32,
    /// Count of days with status double.
    pub double_days: u32,
    /// The total computed pay before deductions.
    pub gross_salary: Decimal,
    /// The pay after deductions; currently identical to gross salary.
    pub net_salary: Decimal,
}
