//! Plain-text payroll reports.
//!
//! A [`PayrollReport`] is a list of titled sections, each holding one line
//! per employee (their [`Employee::describe`] rendering) or a single summary
//! line. Reports only read the roster.

use std::fmt;

use crate::models::{Employee, EmployeeId, EmployeeType};

use super::Roster;

/// Line printed when a lookup misses.
pub const NOT_FOUND_LINE: &str = "Employee not found";

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// The heading printed above the lines.
    pub title: String,
    /// The body lines.
    pub lines: Vec<String>,
}

/// A payroll report made of sections, rendered in the order they were added.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::Employee;
/// use payroll_ledger::roster::{PayrollReport, Roster};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let joined = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let roster: Roster = vec![
///     Employee::salaried(1, "Thorin", joined, Decimal::from(100), Decimal::from(5)),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut report = PayrollReport::new();
/// report.total(&roster);
/// assert_eq!(report.render(), "\nTotal Payroll: 105\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollReport {
    sections: Vec<ReportSection>,
}

impl PayrollReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard summary of a roster: every employee, the total
    /// payroll, then one listing per employee type.
    pub fn summary(roster: &Roster) -> Self {
        let mut report = Self::new();
        report.listing("Employee Details:", roster.iter());
        report.total(roster);
        for employee_type in EmployeeType::ALL {
            report.listing(
                format!("{} Employees:", employee_type),
                roster.list_by_type(employee_type.label()),
            );
        }
        report
    }

    /// Adds a section listing the given employees.
    pub fn listing<'a>(
        &mut self,
        title: impl Into<String>,
        employees: impl IntoIterator<Item = &'a Employee>,
    ) -> &mut Self {
        self.sections.push(ReportSection {
            title: title.into(),
            lines: employees.into_iter().map(Employee::describe).collect(),
        });
        self
    }

    /// Adds the total payroll line.
    ///
    /// The total has no section heading; it renders as its own paragraph.
    pub fn total(&mut self, roster: &Roster) -> &mut Self {
        self.sections.push(ReportSection {
            title: String::new(),
            lines: vec![format!("Total Payroll: {}", roster.total_payroll().normalize())],
        });
        self
    }

    /// Adds the result of looking up `id`: the employee or [`NOT_FOUND_LINE`].
    pub fn lookup(&mut self, roster: &Roster, id: EmployeeId) -> &mut Self {
        let line = roster
            .find_by_id(id)
            .map(Employee::describe)
            .unwrap_or_else(|| NOT_FOUND_LINE.to_string());
        self.sections.push(ReportSection {
            title: format!("Find Employee by ID (ID: {}):", id),
            lines: vec![line],
        });
        self
    }

    /// Returns the sections added so far.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Renders the report. Sections are separated by a blank line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 || section.title.is_empty() {
                writeln!(f)?;
            }
            if !section.title.is_empty() {
                writeln!(f, "{}", section.title)?;
            }
            for line in &section.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn joined() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn roster() -> Roster {
        vec![
            Employee::salaried(1, "Thorin", joined(), Decimal::from(100), Decimal::from(5)),
            Employee::hourly(
                2,
                "Gandalf",
                joined(),
                Decimal::from(10),
                Decimal::from(2),
                Decimal::ZERO,
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_listing_renders_one_line_per_employee() {
        let roster = roster();
        let mut report = PayrollReport::new();
        report.listing("Initial Employee Details:", roster.iter());

        assert_eq!(
            report.render(),
            "Initial Employee Details:\n\
             Employee[name=Thorin,id=1,joinDate=2025-01-06,type=Full-Time,salary=105]\n\
             Employee[name=Gandalf,id=2,joinDate=2025-01-06,type=Part-Time,salary=20]\n"
        );
    }

    #[test]
    fn test_sections_are_separated_by_blank_lines() {
        let roster = roster();
        let mut report = PayrollReport::new();
        report
            .listing("Full-Time Employees:", roster.list_by_type("full-time"))
            .total(&roster);

        assert_eq!(
            report.render(),
            "Full-Time Employees:\n\
             Employee[name=Thorin,id=1,joinDate=2025-01-06,type=Full-Time,salary=105]\n\
             \n\
             Total Payroll: 125\n"
        );
    }

    #[test]
    fn test_lookup_miss_prints_not_found() {
        let roster = roster();
        let mut report = PayrollReport::new();
        report.lookup(&roster, 7);

        assert_eq!(report.sections()[0].lines, vec![NOT_FOUND_LINE.to_string()]);
        assert_eq!(
            report.render(),
            "Find Employee by ID (ID: 7):\nEmployee not found\n"
        );
    }

    #[test]
    fn test_empty_listing_keeps_title() {
        let roster = Roster::new();
        let mut report = PayrollReport::new();
        report.listing("Contract-Type Employees:", roster.iter());
        assert_eq!(report.render(), "Contract-Type Employees:\n");
    }

    #[test]
    fn test_summary_has_listing_total_and_per_type_sections() {
        let report = PayrollReport::summary(&roster());
        let titles: Vec<&str> = report.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Employee Details:",
                "",
                "Full-Time Employees:",
                "Part-Time Employees:",
                "Contract-Type Employees:",
            ]
        );
        assert_eq!(report.sections()[1].lines, vec!["Total Payroll: 125"]);
        assert!(report.sections()[4].lines.is_empty());
    }
}
