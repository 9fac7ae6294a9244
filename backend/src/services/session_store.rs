//! In-memory session store.
//!
//! Each session (one page load) owns the flight table generated for it.
//! Tables are immutable once generated and shared read-only behind `Arc`;
//! the map of sessions is the only mutable state.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use chrono::NaiveDate;

use super::generator::{generate, GeneratorError, GeneratorParams};
use crate::models::FlightRecord;

/// One dashboard session and its generated table.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last day of the generated window.
    pub today: NaiveDate,
    pub records: Arc<Vec<FlightRecord>>,
}

/// In-memory session store.
#[derive(Clone)]
pub struct SessionStore {
    params: Arc<GeneratorParams>,
    sessions: Arc<RwLock<HashMap<String, Arc<Session>>>>,
}

impl SessionStore {
    /// Create a store that generates every session table from `params`.
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params: Arc::new(params),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Parameters every new session is generated from.
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Create a session whose window ends at the local calendar day.
    pub fn create_session(&self) -> Result<Arc<Session>, GeneratorError> {
        self.create_session_at(chrono::Local::now().date_naive())
    }

    /// Create a session whose window ends at `today`.
    pub fn create_session_at(&self, today: NaiveDate) -> Result<Arc<Session>, GeneratorError> {
        // Generate outside the lock.
        let records = generate(&self.params, today)?;
        let session = Arc::new(Session {
            session_id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now(),
            today,
            records: Arc::new(records),
        });
        self.sessions
            .write()
            .insert(session.session_id.clone(), Arc::clone(&session));
        log::info!("Created session {}", session.session_id);
        Ok(session)
    }

    /// Get a session by ID.
    pub fn get_session(&self, session_id: &str) -> Option<Arc<Session>> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Drop a session. Returns `false` when the ID was unknown.
    pub fn remove_session(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().remove(session_id).is_some();
        if removed {
            log::info!("Removed session {}", session_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(GeneratorParams::default())
    }
}
