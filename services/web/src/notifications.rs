//! Transient user-facing notifications
//!
//! Notifications are identified by a monotonically increasing id and removed
//! by that id, never by position. Each one expires a fixed time after it is
//! first rendered; dismissing it earlier cancels the pending expiry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Other,
}

impl NotificationKind {
    /// Parse a kind name; unknown names become `Other`
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "info" => NotificationKind::Info,
            _ => NotificationKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Other => "notice",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    items: Vec<Notification>,
    timers: HashMap<NotificationId, JoinHandle<()>>,
}

impl Inner {
    fn take(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

/// Ordered list of notifications shared by every view
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Inner>>,
    timeout: Duration,
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            timeout,
        }
    }

    /// Append a notification
    pub async fn add(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = NotificationId(inner.next_id);
        inner.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub async fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(NotificationKind::Success, message).await
    }

    pub async fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(NotificationKind::Error, message).await
    }

    pub async fn info(&self, message: impl Into<String>) -> NotificationId {
        self.add(NotificationKind::Info, message).await
    }

    /// Current notifications in insertion order, without side effects
    pub async fn notifications(&self) -> Vec<Notification> {
        self.inner.lock().await.items.clone()
    }

    /// Snapshot for display; starts the expiry timer of newly shown notifications
    pub async fn render(&self) -> Vec<Notification> {
        let mut inner = self.inner.lock().await;
        let unarmed: Vec<NotificationId> = inner
            .items
            .iter()
            .map(|n| n.id)
            .filter(|id| !inner.timers.contains_key(id))
            .collect();

        for id in unarmed {
            let center = self.clone();
            let timeout = self.timeout;
            let timer = tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                center.expire(id).await;
            });
            inner.timers.insert(id, timer);
        }

        inner.items.clone()
    }

    /// Remove a notification before it expires
    ///
    /// Returns `false` when it is already gone.
    pub async fn dismiss(&self, id: NotificationId) -> bool {
        let mut inner = self.inner.lock().await;
        if let Some(timer) = inner.timers.remove(&id) {
            timer.abort();
        }
        inner.take(id)
    }

    async fn expire(&self, id: NotificationId) {
        let mut inner = self.inner.lock().await;
        inner.timers.remove(&id);
        if inner.take(id) {
            debug!("Notification {:?} expired", id);
        }
    }
}
