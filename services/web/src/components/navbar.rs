//! Page header with logout and notifications

use tracing::error;

use crate::notifications::Notification;
use crate::state::AppContext;

pub const TITLE: &str = "Cookbook";

/// Header shown above every page
pub struct Navbar {
    signed_in: bool,
    notifications: Vec<Notification>,
}

impl Navbar {
    /// Snapshot the session state and the pending notifications
    ///
    /// Rendering starts the expiry timers of notifications shown for the first time.
    pub async fn render(ctx: &AppContext) -> Self {
        Self {
            signed_in: ctx.session.is_authenticated(),
            notifications: ctx.notifications.render().await,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drop the session; returns whether it was removed
    pub async fn logout(ctx: &AppContext) -> bool {
        match ctx.session.delete_session() {
            Ok(()) => {
                ctx.notifications.info("Signed out").await;
                true
            }
            Err(e) => {
                error!("Failed to delete session: {}", e);
                ctx.notifications.error(e.user_message()).await;
                false
            }
        }
    }
}

impl std::fmt::Display for Navbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "== {} ==", TITLE)?;
        if self.signed_in {
            write!(f, "  [Logout]")?;
        }
        for notification in &self.notifications {
            write!(f, "\n[{}] {}", notification.kind, notification.message)?;
        }
        Ok(())
    }
}
