//! Roster management and reporting.
//!
//! The [`Roster`] owns employees in insertion order and answers lookups,
//! filters and the payroll total. [`PayrollReport`] renders a roster as text.

mod manager;
mod report;

pub use manager::Roster;
pub use report::{NOT_FOUND_LINE, PayrollReport, ReportSection};
