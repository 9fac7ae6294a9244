//! Application state for the HTTP server.

use crate::config::DashboardConfig;
use crate::services::SessionStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Per-page-load sessions and their generated tables
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new application state from a validated configuration.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            sessions: SessionStore::new(config.generator),
        }
    }
}
