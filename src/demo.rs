//! The sample payroll walk-through.
//!
//! Builds three sample employees, one per variant, and records what the
//! roster reports as it is queried and changed.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Employee;
use crate::roster::{PayrollReport, Roster};

/// How long the sample contract runs past `today`.
pub const SAMPLE_CONTRACT_DAYS: i64 = 90;

/// Returns the three sample employees, all joining on `today`.
pub fn sample_employees(today: NaiveDate) -> Vec<Employee> {
    vec![
        Employee::salaried(
            1,
            "Thorin Okenshield",
            today,
            Decimal::new(8_100_000, 2),
            Decimal::new(500_000, 2),
        ),
        Employee::hourly(
            2,
            "Gandalf The Gray",
            today,
            Decimal::from(2700),
            Decimal::new(24_309, 2),
            Decimal::new(2_700, 2),
        ),
        Employee::contract(
            3,
            "Bilbo Baggins",
            today,
            Decimal::new(5_000_000, 2),
            today + Duration::days(SAMPLE_CONTRACT_DAYS),
        ),
    ]
}

/// Runs the walk-through and returns the resulting report.
///
/// Lists every employee, prints the total payroll and the Full-Time
/// employees, removes employee 2, lists again and finally looks up
/// employee 1.
pub fn demo_report(today: NaiveDate) -> PayrollReport {
    let mut roster: Roster = sample_employees(today).into_iter().collect();
    let mut report = PayrollReport::new();

    report
        .listing("Initial Employee Details:", roster.iter())
        .total(&roster)
        .listing("Full-Time Employees:", roster.list_by_type("Full-Time"));

    let removed = roster.remove(2);
    debug!(removed = removed.is_some(), "Removed sample employee 2");

    report
        .listing("After Removing Employee (ID: 2):", roster.iter())
        .lookup(&roster, 1);
    report
}
