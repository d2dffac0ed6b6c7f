//! Calculation logic for the Attendance Engine.
//!
//! This module contains the attendance aggregation that reduces a snapshot
//! to day counts and the pure salary calculation that turns those counts
//! and a daily wage into gross and net pay.

mod aggregation;
mod salary;

pub use aggregation::{AttendanceSummary, aggregate_attendance};
pub use salary::calculate_salary;
