//! Fire-and-forget push notification surface
//!
//! Delivery is best-effort: failures are logged, never propagated, matching
//! the outbound pattern the history store follows.

use async_trait::async_trait;
use tracing::{info, warn};

/// Outbound push notification capability
#[async_trait]
pub trait PushNotifier: Send + Sync {
    /// Send a notification to a device token. Errors stay inside the
    /// implementation; callers get no failure channel.
    async fn notify(&self, token: &str, title: &str, body: &str);
}

/// Notifier that only logs, for development and tests
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log-only notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushNotifier for LogNotifier {
    async fn notify(&self, token: &str, title: &str, body: &str) {
        if token.trim().is_empty() {
            warn!("dropping notification for empty device token");
            return;
        }
        info!(%token, %title, %body, "push notification (log only)");
    }
}
