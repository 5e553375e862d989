//! Transient notifications.

use std::time::Duration;

/// A short message shown over the page and then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    duration: Duration,
}

impl Toast {
    /// Create a toast shown for `duration`.
    #[must_use]
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }

    /// Text to display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How long the toast stays visible.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
