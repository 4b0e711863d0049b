//! Application state for the payroll ledger API.
//!
//! This module defines the shared roster available to all request handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::roster::Roster;

/// Shared application state.
///
/// Mutations (`add`, `remove`) go through the write lock; lookups, listings
/// and the payroll total take the read lock.
#[derive(Clone, Default)]
pub struct AppState {
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates application state around an existing roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Acquires shared read access to the roster.
    ///
    /// A lock poisoned by a panicking writer is recovered: roster operations
    /// never leave the collection half-modified.
    pub fn read(&self) -> RwLockReadGuard<'_, Roster> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires exclusive write access to the roster.
    pub fn write(&self) -> RwLockWriteGuard<'_, Roster> {
        self.roster.write().unwrap_or_else(PoisonError::into_inner)
    }
}
