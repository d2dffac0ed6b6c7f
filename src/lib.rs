//! Attendance Tracking and Salary Calculation Engine
//!
//! This crate provides functionality for aggregating daily attendance records
//! and calculating gross and net salary from attendance counts and a
//! configurable daily wage.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
