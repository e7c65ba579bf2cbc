//! User-facing notification seam
//!
//! The apply flow reports its outcome through [`Notifier`] so that the toast
//! layer of the frontend stays out of the core.

/// Shown after a successful application.
pub const APPLICATION_SUBMITTED: &str = "Application submitted!";
/// Shown when the store reports a duplicate application.
pub const ALREADY_APPLIED: &str = "You have already applied to this job";
/// Shown for every other apply failure.
pub const APPLY_FAILED: &str = "Failed to apply";
/// Shown when the store rejects the session's access token.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    /// CSS modifier used by the toast host.
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Info => "toast-info",
            NotificationKind::Error => "toast-error",
        }
    }
}

/// Receiver of toast-style notifications.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message)
    }
}
