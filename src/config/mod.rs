//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load engine settings from a YAML
//! file, currently just the default daily wage.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker.yaml").unwrap();
//! println!("Default daily wage: {}", config.default_daily_wage());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{TrackerConfig, WageConfig};
