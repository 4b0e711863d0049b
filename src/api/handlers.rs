//! HTTP request handlers for the payroll ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{Employee, EmployeeId};

use super::request::{EmployeeRequest, ListQuery};
use super::response::{ApiError, ApiErrorResponse, EmployeeResponse, PayrollTotalResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(add_employee))
        .route("/employees/:id", get(get_employee).delete(remove_employee))
        .route("/payroll/total", get(total_payroll))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

/// Turns a non-integer `:id` segment into a 400 response.
fn path_rejection_response(rejection: PathRejection) -> Response {
    ApiErrorResponse::new(
        StatusCode::BAD_REQUEST,
        ApiError::invalid_id(rejection.body_text()),
    )
    .into_response()
}

/// Handler for POST /employees.
///
/// Appends the employee to the end of the roster.
async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let employee: Employee = request.into();
    let body = EmployeeResponse::from(&employee);
    let added = {
        let mut roster = state.write();
        roster.try_add(employee).map(|()| roster.len())
    };
    let roster_size = match added {
        Ok(size) => size,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = body.id,
        employee_type = %body.employee_type,
        roster_size,
        "Employee added"
    );
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Handler for GET /employees, optionally filtered by `?type=`.
async fn list_employees(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let roster = state.read();
    let employees: Vec<EmployeeResponse> = match query.employee_type.as_deref() {
        Some(label) => roster
            .list_by_type(label)
            .into_iter()
            .map(EmployeeResponse::from)
            .collect(),
        None => roster.iter().map(EmployeeResponse::from).collect(),
    };
    Json(employees).into_response()
}

/// Handler for GET /employees/:id.
async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(rejection),
    };

    let roster = state.read();
    match roster.find_by_id(id) {
        Some(employee) => Json(EmployeeResponse::from(employee)).into_response(),
        None => ApiErrorResponse::from(LedgerError::EmployeeNotFound { id }).into_response(),
    }
}

/// Handler for DELETE /employees/:id.
///
/// Removes the first employee with the id. A miss leaves the roster as it was.
async fn remove_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(rejection),
    };

    let removed = state.write().remove(id);
    match removed {
        Some(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                name = %employee.name(),
                "Employee removed"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee to remove not found"
            );
            ApiErrorResponse::from(LedgerError::EmployeeNotFound { id }).into_response()
        }
    }
}

/// Handler for GET /payroll/total.
async fn total_payroll(State(state): State<AppState>) -> Response {
    let roster = state.read();
    Json(PayrollTotalResponse::from(&*roster)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    use crate::roster::Roster;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let joined = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let roster: Roster = vec![
            Employee::salaried(1, "Thorin Okenshield", joined, dec("81000"), dec("5000")),
            Employee::contract(
                3,
                "Bilbo Baggins",
                joined,
                dec("50000"),
                NaiveDate::from_ymd_opt(2025, 4, 6).unwrap(),
            ),
        ]
        .into_iter()
        .collect();
        AppState::new(roster)
    }

    async fn send(router: Router, method: &str, uri: &str, body: Body) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_employee_returns_first_match() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/employees/1", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let employee: EmployeeResponse = body_json(response).await;
        assert_eq!(employee.name, "Thorin Okenshield");
        assert_eq!(employee.salary, dec("86000"));
    }

    #[tokio::test]
    async fn test_get_missing_employee_returns_404() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/employees/2", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_integer_id_returns_400() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/employees/abc", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_ID");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = send(router, "POST", "/employees", Body::from("{invalid json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{ "id": 4, "name": "Dwalin", "join_date": "2025-01-06" }"#;
        let response = send(router, "POST", "/employees", Body::from(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("compensation"));
    }

    #[tokio::test]
    async fn test_overflowing_salary_returns_validation_error() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let body = r#"{
            "id": 9,
            "name": "Smaug",
            "join_date": "2025-01-06",
            "compensation": {
                "kind": "hourly",
                "hours_worked": "1000000000000000",
                "hourly_rate": "1000000000000000",
                "overtime_hours": "0"
            }
        }"#;
        let response = send(router, "POST", "/employees", Body::from(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(state.read().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_missing_employee_returns_404_and_keeps_roster() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let response = send(router, "DELETE", "/employees/99", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.read().len(), 2);
    }

    #[tokio::test]
    async fn test_total_payroll() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/payroll/total", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let total: PayrollTotalResponse = body_json(response).await;
        assert_eq!(total.total_payroll, dec("136000"));
        assert_eq!(total.employee_count, 2);
    }
}
