//! Outbound notification contract.
//!
//! Delivery is best-effort: a failed send must never roll back a committed
//! kill or verification. Callers log and swallow [`NotifyError`].

use manhunt_types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// A human-readable event addressed to a single player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: PlayerId,
    /// Event kind, e.g. `KILL_VERIFIED`.
    pub kind: String,
    pub message: String,
    /// Structured payload for client-side handling.
    pub data: HashMap<String, String>,
}

/// Fire-and-forget delivery of notifications.
pub trait NotificationSink: Send + Sync {
    fn send(&self, notification: Notification) -> Result<(), NotifyError>;
}
