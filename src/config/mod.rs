//! Configuration loading for the payroll ledger.
//!
//! This module loads the ledger configuration from a YAML file: server
//! address, log level and the seed employees placed on the roster at start-up.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ledger.yaml").unwrap();
//! println!("Listening on {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LedgerConfig, ServerConfig, TelemetryConfig};
