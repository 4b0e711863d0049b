//! Error types for the payroll ledger.
//!
//! Core roster operations never fail: a lookup miss is an absent result.
//! The errors here belong to the layers around the roster (configuration,
//! the HTTP API and the command line), built with the `thiserror` crate.

use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::LedgerError;
///
/// let error = LedgerError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No employee with the given id is on the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: EmployeeId,
    },

    /// An employee's salary, or the payroll total with them added, does not
    /// fit in a `Decimal`.
    #[error("Salary of employee {id} overflows the payroll total")]
    SalaryOverflow {
        /// The id of the rejected employee.
        id: EmployeeId,
    },

    /// An employee type label did not name any known variant.
    #[error("Unknown employee type: {label}")]
    UnknownEmployeeType {
        /// The label that failed to parse.
        label: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP server could not bind or stopped with an error.
    #[error("Server error: {message}")]
    Server {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = LedgerError::EmployeeNotFound { id: 7 };
        assert_eq!(error.to_string(), "Employee not found: 7");
    }

    #[test]
    fn test_salary_overflow_displays_id() {
        let error = LedgerError::SalaryOverflow { id: 3 };
        assert_eq!(
            error.to_string(),
            "Salary of employee 3 overflows the payroll total"
        );
    }

    #[test]
    fn test_unknown_employee_type_displays_label() {
        let error = LedgerError::UnknownEmployeeType {
            label: "Intern".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown employee type: Intern");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = LedgerError::ConfigNotFound {
            path: "/missing/ledger.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/ledger.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = LedgerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_server_error_displays_message() {
        let error = LedgerError::Server {
            message: "address in use".to_string(),
        };
        assert_eq!(error.to_string(), "Server error: address in use");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LedgerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> LedgerResult<()> {
            Err(LedgerError::EmployeeNotFound { id: 1 })
        }

        fn propagates_error() -> LedgerResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
