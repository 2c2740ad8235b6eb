//! Application context shared by every page

use std::sync::Arc;
use std::time::Duration;

use api::RecipeClient;
use auth::{FileStore, KeyValueStore, SessionManager};
use common::{ClientConfig, ClientResult};
use tracing::info;

use crate::notifications::NotificationCenter;

/// Handles passed explicitly to pages and actions
#[derive(Clone)]
pub struct AppContext {
    pub api: RecipeClient,
    pub session: SessionManager,
    pub notifications: NotificationCenter,
}

impl AppContext {
    /// Build the context from configuration, persisting the session on disk
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        info!("Session storage at {}", config.storage_dir.display());
        let session = SessionManager::new(Arc::new(FileStore::new(config.storage_dir.clone())));
        let api = RecipeClient::from_config(config, Arc::new(session.clone()))?;

        Ok(Self {
            api,
            session,
            notifications: NotificationCenter::new(config.notification_timeout()),
        })
    }

    /// Build the context over an arbitrary store
    pub fn with_store(
        api_base_url: &str,
        store: Arc<dyn KeyValueStore>,
        notification_timeout: Duration,
    ) -> ClientResult<Self> {
        let session = SessionManager::new(store);
        let api = RecipeClient::new(api_base_url, Arc::new(session.clone()))?;

        Ok(Self {
            api,
            session,
            notifications: NotificationCenter::new(notification_timeout),
        })
    }
}
