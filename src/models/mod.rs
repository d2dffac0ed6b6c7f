//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;

pub use attendance::{AttendanceMap, AttendanceStatus};
pub use calculation_result::SalaryCalculationResult;
