//! Response types for the payroll ledger API.
//!
//! This module defines the JSON response bodies, the error response
//! structure and the mapping from [`LedgerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Compensation, Employee, EmployeeId, EmployeeType};
use crate::roster::Roster;

/// An employee as returned by the API, with its computed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Identifier of the employee.
    pub id: EmployeeId,
    /// The employee's name.
    pub name: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// The employee type label.
    pub employee_type: EmployeeType,
    /// The computed salary figure.
    pub salary: Decimal,
    /// How the employee is paid.
    pub compensation: Compensation,
    /// The one-line rendering of the employee.
    pub description: String,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id(),
            name: employee.name().to_string(),
            join_date: employee.join_date(),
            employee_type: employee.employee_type(),
            salary: employee.calculate_salary(),
            compensation: employee.compensation().clone(),
            description: employee.describe(),
        }
    }
}

/// Body of `GET /payroll/total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollTotalResponse {
    /// Sum of every employee's salary.
    pub total_payroll: Decimal,
    /// Number of employees on the roster.
    pub employee_count: usize,
}

impl From<&Roster> for PayrollTotalResponse {
    fn from(roster: &Roster) -> Self {
        Self {
            total_payroll: roster.total_payroll(),
            employee_count: roster.len(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: EmployeeId) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("No employee with id {} is on the roster", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path parameter error response.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new("INVALID_ID", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::EmployeeNotFound { id } => {
                ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::employee_not_found(id))
            }
            LedgerError::SalaryOverflow { id } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Salary of employee {} overflows the payroll total", id),
                    "Amounts must keep each salary and the roster total within the decimal range",
                ),
            ),
            LedgerError::UnknownEmployeeType { label } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_EMPLOYEE_TYPE",
                    format!("Unknown employee type: {}", label),
                    "Expected one of Full-Time, Part-Time, Contract-Type",
                ),
            ),
            LedgerError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            LedgerError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            LedgerError::Server { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("SERVER_ERROR", "Server error", message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_employee_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = LedgerError::EmployeeNotFound { id: 2 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "EMPLOYEE_NOT_FOUND");
        assert!(api_error.error.message.contains('2'));
    }

    #[test]
    fn test_salary_overflow_maps_to_validation_error() {
        let api_error: ApiErrorResponse = LedgerError::SalaryOverflow { id: 4 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_unknown_type_maps_to_400() {
        let api_error: ApiErrorResponse = LedgerError::UnknownEmployeeType {
            label: "Intern".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_EMPLOYEE_TYPE");
    }

    #[test]
    fn test_employee_response_carries_computed_fields() {
        let employee = Employee::salaried(
            1,
            "Thorin Okenshield",
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            Decimal::from_str("81000.00").unwrap(),
            Decimal::from_str("5000.00").unwrap(),
        );
        let response = EmployeeResponse::from(&employee);

        assert_eq!(response.employee_type, EmployeeType::FullTime);
        assert_eq!(response.salary, Decimal::from(86000));
        assert_eq!(response.description, employee.describe());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["employee_type"], "Full-Time");
        assert_eq!(json["compensation"]["kind"], "salaried");
    }
}
