//! Transient notification state types.

use std::time::{Duration, Instant};

/// How long a notification stays on screen before auto-dismissing.
///
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Specifying the notification kinds.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, auto-dismissing notification. At most one is visible at a
/// time; showing a new one replaces the current message and restarts the
/// timer.
///
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    /// Return a new notification shown as of now.
    ///
    pub fn new(message: &str, kind: ToastKind) -> Toast {
        Toast {
            message: message.to_owned(),
            kind,
            shown_at: Instant::now(),
        }
    }

    /// Whether the notification has outlived its display duration at the
    /// given point in time.
    ///
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}
