//! Employee record.
//!
//! An [`Employee`] carries the identity fields shared by every variant and a
//! [`Compensation`] deciding how they are paid. Records are immutable once
//! built: fields are only reachable through accessors.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::compensation::{Compensation, EmployeeType};

/// Identifier of an employee. Uniqueness is up to the caller.
pub type EmployeeId = i32;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    join_date: NaiveDate,
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee from its identity and compensation.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        join_date: NaiveDate,
        compensation: Compensation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            join_date,
            compensation,
        }
    }

    /// Creates a salaried (Full-Time) employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::salaried(
    ///     1,
    ///     "Thorin Okenshield",
    ///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
    ///     Decimal::from(81000),
    ///     Decimal::from(5000),
    /// );
    /// assert_eq!(employee.calculate_salary(), Decimal::from(86000));
    /// ```
    pub fn salaried(
        id: EmployeeId,
        name: impl Into<String>,
        join_date: NaiveDate,
        monthly_salary: Decimal,
        bonus: Decimal,
    ) -> Self {
        Self::new(
            id,
            name,
            join_date,
            Compensation::Salaried {
                monthly_salary,
                bonus,
            },
        )
    }

    /// Creates an hourly (Part-Time) employee.
    pub fn hourly(
        id: EmployeeId,
        name: impl Into<String>,
        join_date: NaiveDate,
        hours_worked: Decimal,
        hourly_rate: Decimal,
        overtime_hours: Decimal,
    ) -> Self {
        Self::new(
            id,
            name,
            join_date,
            Compensation::Hourly {
                hours_worked,
                hourly_rate,
                overtime_hours,
            },
        )
    }

    /// Creates a contract (Contract-Type) employee.
    pub fn contract(
        id: EmployeeId,
        name: impl Into<String>,
        join_date: NaiveDate,
        contract_amount: Decimal,
        contract_end_date: NaiveDate,
    ) -> Self {
        Self::new(
            id,
            name,
            join_date,
            Compensation::Contract {
                contract_amount,
                contract_end_date,
            },
        )
    }

    /// Returns the employee id.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date the employee joined.
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    /// Returns how the employee is paid.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Calculates the employee's salary figure.
    pub fn calculate_salary(&self) -> Decimal {
        self.compensation.calculate_salary()
    }

    /// Calculates the salary figure, or `None` if it overflows [`Decimal`].
    pub fn checked_salary(&self) -> Option<Decimal> {
        self.compensation.checked_salary()
    }

    /// Returns the employee type.
    pub fn employee_type(&self) -> EmployeeType {
        self.compensation.employee_type()
    }

    /// Renders every field plus the computed type and salary.
    ///
    /// Dates are formatted as `YYYY-MM-DD` and the salary is printed without
    /// trailing zeros. Contract employees also show their end date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::contract(
    ///     3,
    ///     "Bilbo Baggins",
    ///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
    ///     Decimal::from(50000),
    ///     NaiveDate::from_ymd_opt(2025, 4, 6).unwrap(),
    /// );
    /// assert_eq!(
    ///     employee.describe(),
    ///     "Employee[name=Bilbo Baggins,id=3,joinDate=2025-01-06,type=Contract-Type,\
    ///      salary=50000,contractEndDate=2025-04-06]"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let mut rendered = format!(
            "Employee[name={},id={},joinDate={},type={},salary={}",
            self.name,
            self.id,
            self.join_date.format(DATE_FORMAT),
            self.employee_type(),
            self.calculate_salary().normalize(),
        );
        if let Compensation::Contract {
            contract_end_date, ..
        } = &self.compensation
        {
            rendered.push_str(&format!(
                ",contractEndDate={}",
                contract_end_date.format(DATE_FORMAT)
            ));
        }
        rendered.push(']');
        rendered
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
