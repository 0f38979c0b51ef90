//! User-facing notification capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores and views report outcomes through an injected `Notifier` rather than
//! a global toast channel, so tests can substitute a recording stub.

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    /// CSS modifier used by the toast stack.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// Sink for transient success/failure messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotifyKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotifyKind::Error, message);
    }
}
