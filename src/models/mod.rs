//! Core data models for the payroll ledger.
//!
//! This module contains the employee record and its compensation variants.

mod compensation;
mod employee;

pub use compensation::{Compensation, EmployeeType, overtime_multiplier};
pub use employee::{Employee, EmployeeId};
