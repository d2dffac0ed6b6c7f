//! Salary calculation functionality.
//!
//! This module provides the pure function that derives gross and net salary
//! from a daily wage and three pre-aggregated day counts.

use rust_decimal::Decimal;

use crate::models::SalaryCalculationResult;

/// Calculates gross and net salary from a daily wage and day counts.
///
/// Present days are recovered by subtraction: `total_days - absent_days -
/// double_days`. Each present day pays one daily wage, each double-shift day
/// pays twice the daily wage, and absent days pay nothing. No deductions
/// apply, so net salary equals gross salary.
///
/// The function is pure and total: it performs no validation and never
/// fails. The three counts arrive as independent inputs, so inconsistent
/// counts (where `absent_days + double_days > total_days`) produce a
/// negative present-day count that flows through the formula unclamped.
/// Consistency is the caller's contract, normally upheld by deriving all
/// three counts from one snapshot via
/// [`aggregate_attendance`](super::aggregate_attendance). A negative wage
/// likewise passes through arithmetically; the API boundary rejects it
/// before it reaches here.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let wage = Decimal::from_str("500").unwrap();
/// let result = calculate_salary(wage, 20, 2, 3);
/// // 15 present days * 500 + 3 double days * 500 * 2
/// assert_eq!(result.gross_salary, Decimal::from_str("10500").unwrap());
/// assert_eq!(result.net_salary, result.gross_salary);
/// ```
pub fn calculate_salary(
    daily_wage: Decimal,
    total_days: u32,
    absent_days: u32,
    double_days: u32,
) -> SalaryCalculationResult {
    // Signed on purpose: inconsistent counts go negative, not clamped.
    let present_days = i64::from(total_days) - i64::from(absent_days) - i64::from(double_days);

    let gross_salary =
        Decimal::from(present_days) * daily_wage + Decimal::from(double_days) * daily_wage * Decimal::TWO;
    let net_salary = gross_salary;

    SalaryCalculationResult {
        total_days,
        absent_days,
        double_days,
        gross_salary,
        net_salary,
    }
}
