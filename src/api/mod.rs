//! HTTP API module for the payroll ledger.
//!
//! This module exposes the roster over REST: add, remove, look up and list
//! employees, and read the payroll total.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ListQuery};
pub use response::{ApiError, ApiErrorResponse, EmployeeResponse, PayrollTotalResponse};
pub use server::serve;
pub use state::AppState;
