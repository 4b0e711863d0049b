//! Runs the API on a tokio TCP listener.

use tokio::net::TcpListener;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};

use super::handlers::create_router;
use super::state::AppState;

/// Binds `address` and serves the API until the process stops.
pub async fn serve(state: AppState, address: &str) -> LedgerResult<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| LedgerError::Server {
            message: format!("failed to bind {}: {}", address, e),
        })?;

    info!(address = %address, "Payroll ledger API listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| LedgerError::Server {
            message: e.to_string(),
        })
}
