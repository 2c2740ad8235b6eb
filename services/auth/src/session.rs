//! Session management over client storage

use std::collections::HashSet;
use std::sync::Arc;

use common::{ClientResult, TokenSource};
use tracing::{info, warn};

use crate::{models::SessionRecord, storage::KeyValueStore};

/// Storage key of the session record
pub const SESSION_KEY: &str = "user";

/// Single accessor for the persisted session record
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the current session, if any
    ///
    /// A record that cannot be read or parsed is treated as no session.
    pub fn current(&self) -> Option<SessionRecord> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session record: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring unreadable session record: {}", e);
                None
            }
        }
    }

    /// Whether a session record exists
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Create a new session from a token issued by the recipe service
    pub fn create_session(&self, token: &str) -> ClientResult<SessionRecord> {
        let record = SessionRecord::from_token(token)?;
        info!("Creating session for user: {}", record.user_id);

        self.save(&record)?;
        Ok(record)
    }

    /// Replace the cached favorite ids with the server's list
    ///
    /// Returns `false` without writing anything when there is no session.
    pub fn replace_saved_recipes(&self, ids: Vec<String>) -> ClientResult<bool> {
        let Some(mut record) = self.current() else {
            warn!("Discarding favorite list: no active session");
            return Ok(false);
        };

        info!(
            "Updating favorites for user {}: {} saved",
            record.user_id,
            ids.len()
        );
        record.saved_recipes = Some(ids);
        self.save(&record)?;
        Ok(true)
    }

    /// Favorite recipe ids of the current session
    pub fn favorite_ids(&self) -> HashSet<String> {
        self.current()
            .map(|record| record.favorite_ids())
            .unwrap_or_default()
    }

    /// Delete the session (logout)
    pub fn delete_session(&self) -> ClientResult<()> {
        info!("Deleting session");
        self.store.remove(SESSION_KEY)
    }

    fn save(&self, record: &SessionRecord) -> ClientResult<()> {
        let raw = serde_json::to_string(record)?;
        self.store.set(SESSION_KEY, &raw)
    }
}

impl TokenSource for SessionManager {
    fn bearer_token(&self) -> Option<String> {
        self.current().map(|record| record.token)
    }
}
