//! In-memory payroll ledger.
//!
//! This crate models employees paid under one of three compensation variants
//! (salaried, hourly with overtime, fixed-term contract) and a roster that
//! adds, removes, looks up, filters and totals them.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod roster;
pub mod telemetry;
