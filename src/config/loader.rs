//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::roster::Roster;

use super::types::{LedgerConfig, ServerConfig, TelemetryConfig};

/// Loads and provides access to the ledger configuration.
///
/// The configuration file has the following shape:
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 8080
/// telemetry:
///   log_level: info
/// seed:
///   - id: 1
///     name: Thorin Okenshield
///     join_date: "2025-01-06"
///     compensation:
///       kind: salaried
///       monthly_salary: "81000.00"
///       bonus: "5000.00"
/// ```
///
/// Every section is optional.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ledger.yaml").unwrap();
/// let roster = loader.seed_roster();
/// println!("Seeded {} employees", roster.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or a malformed employee (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(
            path = %path_str,
            seed_count = loader.config.seed.len(),
            "Loaded ledger configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    ///
    /// Seed employees whose salaries overflow the payroll total are rejected
    /// as a `ConfigParseError`.
    pub fn from_yaml(content: &str, origin: &str) -> LedgerResult<Self> {
        let parse_error = |message: String| LedgerError::ConfigParseError {
            path: origin.to_string(),
            message,
        };

        let config = serde_yaml::from_str::<LedgerConfig>(content)
            .map_err(|e| parse_error(e.to_string()))?;
        config
            .try_seed_roster()
            .map_err(|e| parse_error(e.to_string()))?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn telemetry(&self) -> &TelemetryConfig {
        &self.config.telemetry
    }

    /// Builds a roster from the configured seed employees.
    pub fn seed_roster(&self) -> Roster {
        self.config.seed_roster()
    }
}
