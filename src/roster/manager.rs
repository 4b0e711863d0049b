//! The roster: an ordered, owned collection of employees.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Employee, EmployeeId};

/// An ordered collection of employees.
///
/// Insertion order is preserved. Ids are not required to be unique; every
/// lookup scans from the front and the first match wins.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::Employee;
/// use payroll_ledger::roster::Roster;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let joined = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let mut roster = Roster::new();
/// roster.add(Employee::salaried(1, "Thorin", joined, Decimal::from(100), Decimal::from(5)));
/// roster.add(Employee::contract(3, "Bilbo", joined, Decimal::from(50), joined));
///
/// assert_eq!(roster.total_payroll(), Decimal::from(155));
/// assert!(roster.find_by_id(2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the end of the roster.
    pub fn add(&mut self, employee: Employee) {
        debug!(
            employee_id = employee.id(),
            employee_type = %employee.employee_type(),
            "Adding employee to roster"
        );
        self.employees.push(employee);
    }

    /// Appends an employee only if their salary, and the payroll total with
    /// them added, fit in a [`Decimal`].
    ///
    /// On `SalaryOverflow` the roster is left unchanged.
    pub fn try_add(&mut self, employee: Employee) -> LedgerResult<()> {
        let total = employee
            .checked_salary()
            .zip(self.checked_total_payroll())
            .and_then(|(salary, total)| total.checked_add(salary));
        if total.is_none() {
            return Err(LedgerError::SalaryOverflow { id: employee.id() });
        }
        self.add(employee);
        Ok(())
    }

    /// Removes the first employee with the given id.
    ///
    /// Returns the removed employee, or `None` (leaving the roster untouched)
    /// when no employee matches.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let position = self.employees.iter().position(|e| e.id() == id);
        match position {
            Some(index) => {
                debug!(employee_id = id, index, "Removing employee from roster");
                Some(self.employees.remove(index))
            }
            None => {
                debug!(employee_id = id, "No employee to remove");
                None
            }
        }
    }

    /// Returns the first employee with the given id.
    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Returns every employee in insertion order.
    pub fn list_all(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the employees whose type label equals `label`, ignoring case.
    ///
    /// An unknown label matches nobody.
    pub fn list_by_type(&self, label: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.employee_type().matches_label(label))
            .collect()
    }

    /// Sums the salary of every employee. Zero for an empty roster.
    ///
    /// The sum saturates at the bounds of [`Decimal`] instead of panicking.
    pub fn total_payroll(&self) -> Decimal {
        self.employees
            .iter()
            .map(Employee::calculate_salary)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sums the salary of every employee, or `None` if any salary or the
    /// running total overflows [`Decimal`].
    pub fn checked_total_payroll(&self) -> Option<Decimal> {
        self.employees
            .iter()
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.checked_salary()?))
    }

    /// Returns an iterator over the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for employee in iter {
            roster.add(employee);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
