//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceMap;

/// Request body for the `/calculate` endpoint.
///
/// Carries the two inputs a recomputation needs: the attendance snapshot
/// and, optionally, the daily wage. When the wage is omitted the configured
/// default applies.
///
/// # Example
///
/// ```json
/// {
///     "daily_wage": "500",
///     "attendance": {
///         "2026-08-03": "present",
///         "2026-08-04": "double",
///         "2026-08-05": "absent",
///         "2026-08-09": "holiday"
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The daily wage for this calculation. Falls back to the configured
    /// default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_wage: Option<Decimal>,
    /// The attendance snapshot: one status per calendar day.
    pub attendance: AttendanceMap,
}
