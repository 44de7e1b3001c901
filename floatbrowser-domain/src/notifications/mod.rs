//! Transient user notifications (toasts).
//!
//! The controller reports outcomes through a [`NotificationSink`]; how a
//! toast is rendered and dismissed belongs to the host surface. Surfaces
//! that show toasts visually should keep them up for
//! [`TOAST_AUTO_DISMISS`] and then remove them.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

/// How long a rendered toast stays visible before auto-dismissing.
pub const TOAST_AUTO_DISMISS: Duration = Duration::from_millis(2200);

/// Capability that surfaces a short status message to the user.
///
/// Showing a toast never fails from the controller's point of view; sinks
/// swallow their own delivery problems.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn show(&self, message: &str);
}

/// [`NotificationSink`] that writes toasts to the log.
///
/// The default sink for headless embeddings and tests that do not care
/// about toast content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn show(&self, message: &str) {
        info!(target: "floatbrowser::toast", "{}", message);
    }
}
