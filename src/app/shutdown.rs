//! Graceful shutdown handling for the scene feed.
//!
//! The driver checks the flag only between ticks, so a consumer never
//! observes a half-updated star field.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Cloneable cancellation handle shared between the driver and its owner.
#[derive(Clone, Default)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests shutdown. Wakes a driver that is sleeping between ticks.
    pub fn request_shutdown(&self) {
        if !self.shutdown_requested.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
        }
        self.notify.notify_waiters();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Sleeps for `duration` unless shutdown is requested first.
    pub async fn sleep(&self, duration: Duration) {
        let notified = self.notify.notified();
        if self.is_shutdown_requested() {
            return;
        }
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            _ = notified => {}
        }
    }

    /// Requests shutdown when the process receives Ctrl+C.
    pub fn install_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }
}
