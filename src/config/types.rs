//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::error::LedgerResult;
use crate::models::Employee;
use crate::roster::Roster;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where the HTTP API listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host or IP address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelemetryConfig {
    /// The `tracing` filter used when `RUST_LOG` is not set (e.g. "info").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// The complete ledger configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Employees placed on the roster at start-up, in file order.
    #[serde(default)]
    pub seed: Vec<Employee>,
}

impl LedgerConfig {
    /// Builds a roster holding the seed employees in file order.
    pub fn seed_roster(&self) -> Roster {
        self.seed.iter().cloned().collect()
    }

    /// Builds the seed roster, failing with `SalaryOverflow` on the first
    /// employee whose salary or running total overflows.
    pub fn try_seed_roster(&self) -> LedgerResult<Roster> {
        let mut roster = Roster::new();
        for employee in &self.seed {
            roster.try_add(employee.clone())?;
        }
        Ok(roster)
    }
}
