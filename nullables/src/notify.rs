//! Recording notification sink.

use manhunt_notify::{Notification, NotificationSink, NotifyError};
use std::sync::Mutex;

/// Captures every notification sent through it, or fails every send when
/// constructed with [`RecordingSink::failing`].
pub struct RecordingSink {
    sent: Mutex<Vec<Notification>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A sink whose every send fails, for exercising best-effort callers.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, notification: Notification) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Delivery(
                "recording sink configured to fail".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}
