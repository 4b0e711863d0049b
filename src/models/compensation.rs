//! Compensation variants and their salary formulas.
//!
//! Every employee is paid under exactly one [`Compensation`] variant. The
//! variant decides both the salary figure and the [`EmployeeType`] label
//! used for display and filtering.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Returns the multiplier applied to the hourly rate for overtime hours.
///
/// The multiplier is 1.5 (time and a half).
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// The employment category an employee belongs to.
///
/// Each [`Compensation`] variant maps to exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeType {
    /// Salaried employees.
    #[serde(rename = "Full-Time")]
    FullTime,
    /// Hourly employees.
    #[serde(rename = "Part-Time")]
    PartTime,
    /// Fixed-term contractors.
    #[serde(rename = "Contract-Type")]
    Contract,
}

impl EmployeeType {
    /// All employee types, in display order.
    pub const ALL: [EmployeeType; 3] = [Self::FullTime, Self::PartTime, Self::Contract];

    /// Returns the fixed display label for this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::EmployeeType;
    ///
    /// assert_eq!(EmployeeType::FullTime.label(), "Full-Time");
    /// assert_eq!(EmployeeType::Contract.label(), "Contract-Type");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::Contract => "Contract-Type",
        }
    }

    /// Returns true if `label` equals this type's label, ignoring case.
    ///
    /// Characters are compared one by one and are equal when their upper-case
    /// or lower-case forms agree, so `"Full-Tıme"` (dotless i) matches.
    pub fn matches_label(self, label: &str) -> bool {
        let mut expected = self.label().chars();
        let mut actual = label.chars();
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if chars_equal_ignoring_case(a, b) => {}
                _ => return false,
            }
        }
    }
}

fn chars_equal_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|employee_type| employee_type.matches_label(s))
            .ok_or_else(|| LedgerError::UnknownEmployeeType {
                label: s.to_string(),
            })
    }
}

/// How an employee is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    /// A fixed monthly salary plus a bonus.
    Salaried {
        /// The monthly salary.
        monthly_salary: Decimal,
        /// The bonus paid on top of the salary.
        bonus: Decimal,
    },
    /// Hours worked at an hourly rate, with overtime at time and a half.
    Hourly {
        /// Ordinary hours worked.
        hours_worked: Decimal,
        /// The rate paid per ordinary hour.
        hourly_rate: Decimal,
        /// Overtime hours worked.
        overtime_hours: Decimal,
    },
    /// A fixed contract amount.
    Contract {
        /// The amount paid for the contract.
        contract_amount: Decimal,
        /// The date the contract ends. Display only.
        contract_end_date: NaiveDate,
    },
}

impl Compensation {
    /// Calculates the salary figure for this compensation.
    ///
    /// - Salaried: `monthly_salary + bonus`
    /// - Hourly: `hours_worked * hourly_rate + overtime_hours * hourly_rate * 1.5`
    /// - Contract: `contract_amount`, whatever the end date
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::Compensation;
    /// use rust_decimal::Decimal;
    ///
    /// let hourly = Compensation::Hourly {
    ///     hours_worked: Decimal::from(10),
    ///     hourly_rate: Decimal::from(20),
    ///     overtime_hours: Decimal::from(2),
    /// };
    /// assert_eq!(hourly.calculate_salary(), Decimal::from(260));
    /// ```
    ///
    /// Arithmetic saturates at the bounds of [`Decimal`] instead of panicking;
    /// [`Compensation::checked_salary`] reports that case as `None`.
    pub fn calculate_salary(&self) -> Decimal {
        match self {
            Self::Salaried {
                monthly_salary,
                bonus,
            } => monthly_salary.saturating_add(*bonus),
            Self::Hourly {
                hours_worked,
                hourly_rate,
                overtime_hours,
            } => {
                let ordinary = hours_worked.saturating_mul(*hourly_rate);
                let overtime_rate = hourly_rate.saturating_mul(overtime_multiplier());
                ordinary.saturating_add(overtime_hours.saturating_mul(overtime_rate))
            }
            Self::Contract {
                contract_amount, ..
            } => *contract_amount,
        }
    }

    /// Calculates the salary figure, or `None` if it overflows [`Decimal`].
    pub fn checked_salary(&self) -> Option<Decimal> {
        match self {
            Self::Salaried {
                monthly_salary,
                bonus,
            } => monthly_salary.checked_add(*bonus),
            Self::Hourly {
                hours_worked,
                hourly_rate,
                overtime_hours,
            } => {
                let ordinary = hours_worked.checked_mul(*hourly_rate)?;
                let overtime_rate = hourly_rate.checked_mul(overtime_multiplier())?;
                ordinary.checked_add(overtime_hours.checked_mul(overtime_rate)?)
            }
            Self::Contract {
                contract_amount, ..
            } => Some(*contract_amount),
        }
    }

    /// Returns the employee type this compensation belongs to.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Self::Salaried { .. } => EmployeeType::FullTime,
            Self::Hourly { .. } => EmployeeType::PartTime,
            Self::Contract { .. } => EmployeeType::Contract,
        }
    }
}
