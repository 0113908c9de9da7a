//! Transient user-facing notifications.
//!
//! Cart mutations surface a short confirmation toast ("Meta Quest 3 added
//! to cart!"). The [`Notifier`] trait is the fire-and-forget boundary the
//! cart store emits through; implementations decide how the message is
//! shown and when it goes away. Nothing ever calls back into the store.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

/// How long a notification stays visible before self-dismissing.
pub const DEFAULT_DISMISS_MS: i64 = 3000;

/// Severity of a notification, controlling its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// Positive confirmation message.
    Success,
}

impl Severity {
    /// Stable string form, used for logging and styling hooks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    /// Display `message` transiently with the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Notifier that emits structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::info!(severity = severity.as_str(), "{message}");
    }
}

/// A notification currently being shown.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Visual severity.
    pub severity: Severity,
    /// When the notification was raised.
    pub shown_at: DateTime<Utc>,
}

/// Notifier that retains notifications until they self-dismiss.
///
/// The embedding UI polls [`active`](Self::active) to know what toasts to
/// show; entries older than the dismiss interval are pruned on read. This
/// mirrors the on-page behavior where a toast slides out on its own after
/// a fixed interval.
#[derive(Debug)]
pub struct NotificationCenter {
    dismiss_after: TimeDelta,
    shown: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    /// Create a center whose notifications dismiss after `dismiss_after`.
    #[must_use]
    pub const fn new(dismiss_after: TimeDelta) -> Self {
        Self {
            dismiss_after,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Returns the notifications still visible right now.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Utc::now())
    }

    /// Returns the notifications still visible at `now`, pruning the rest.
    #[must_use]
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut shown = self.shown.lock().unwrap_or_else(PoisonError::into_inner);
        shown.retain(|n| now - n.shown_at < self.dismiss_after);
        shown.clone()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(TimeDelta::milliseconds(DEFAULT_DISMISS_MS))
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::debug!(severity = severity.as_str(), "notification: {message}");
        let mut shown = self.shown.lock().unwrap_or_else(PoisonError::into_inner);
        shown.push(Notification {
            message: message.to_owned(),
            severity,
            shown_at: Utc::now(),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Success.as_str(), "success");
    }

    #[test]
    fn test_center_retains_notification() {
        let center = NotificationCenter::default();
        center.notify("Meta Quest 3 added to cart!", Severity::Success);

        let active = center.active();
        assert_eq!(active.len(), 1);
        let first = active.first().unwrap();
        assert_eq!(first.message, "Meta Quest 3 added to cart!");
        assert_eq!(first.severity, Severity::Success);
    }

    #[test]
    fn test_center_dismisses_after_interval() {
        let center = NotificationCenter::new(TimeDelta::milliseconds(3000));
        center.notify("Item removed from cart", Severity::Info);

        let shown_at = center.active().first().unwrap().shown_at;

        // Still visible just before the interval elapses
        let almost = shown_at + TimeDelta::milliseconds(2999);
        assert_eq!(center.active_at(almost).len(), 1);

        // Gone once the interval has passed
        let after = shown_at + TimeDelta::milliseconds(3000);
        assert!(center.active_at(after).is_empty());

        // And stays gone for subsequent reads
        assert!(center.active_at(shown_at).is_empty());
    }

    #[test]
    fn test_center_keeps_newer_entries() {
        let center = NotificationCenter::new(TimeDelta::milliseconds(3000));
        center.notify("first", Severity::Info);
        center.notify("second", Severity::Success);

        let active = center.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active.first().unwrap().message, "first");
    }
}
