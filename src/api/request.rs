//! Request types for the payroll ledger API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Compensation, Employee, EmployeeId};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Identifier of the employee. Duplicates are accepted.
    pub id: EmployeeId,
    /// The employee's name.
    pub name: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// How the employee is paid, tagged by `kind`.
    pub compensation: Compensation,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee::new(req.id, req.name, req.join_date, req.compensation)
    }
}

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Optional type label to filter by, compared ignoring case.
    #[serde(rename = "type")]
    pub employee_type: Option<String>,
}
