//! Notification seam between loaders and the surrounding UI.
//!
//! Loaders report user-visible failures through [`Notifier`] without knowing
//! how they are displayed; the production implementation logs through
//! `tracing`, and tests substitute a recording double.

/// How prominently a notice should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    /// Failure the user must see ("destructive" in the site's toast terms).
    Error,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Production notifier: emits notices as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::error!(title = %notice.title, "{}", notice.body),
            Severity::Info => tracing::info!(title = %notice.title, "{}", notice.body),
        }
    }
}
