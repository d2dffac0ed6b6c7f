//! Configuration types for the Attendance Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The default daily wage applied when no value is configured.
fn default_daily_wage() -> Decimal {
    Decimal::from(500)
}

/// Wage settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WageConfig {
    /// The daily wage used when a request does not supply one.
    #[serde(default = "default_daily_wage")]
    pub default_daily: Decimal,
}

impl Default for WageConfig {
    fn default() -> Self {
        Self {
            default_daily: default_daily_wage(),
        }
    }
}

/// The complete engine configuration loaded from the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    /// Wage settings.
    #[serde(default)]
    pub wage: WageConfig,
}
