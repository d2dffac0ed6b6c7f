//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TrackerConfig;

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads a single YAML settings file and exposes the
/// resolved values. The only setting the engine carries today is the
/// default daily wage, which falls back to 500 when the file omits it.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracker.yaml").unwrap();
/// println!("Default daily wage: {}", loader.default_daily_wage());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/tracker.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The configured default wage is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tracker.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;

        Ok(Self { config })
    }

    /// Parses and validates the settings file content.
    fn parse(content: &str, path_str: &str) -> EngineResult<TrackerConfig> {
        let config: TrackerConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.to_string(),
                message: e.to_string(),
            })?;

        if config.wage.default_daily < Decimal::ZERO {
            return Err(EngineError::NegativeWage {
                wage: config.wage.default_daily,
            });
        }

        Ok(config)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the daily wage applied when a request does not supply one.
    pub fn default_daily_wage(&self) -> Decimal {
        self.config.wage.default_daily
    }
}
