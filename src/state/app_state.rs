//! Application state definitions

use crate::state::QuoteWizard;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Wizard,
    /// Shown after a quote request was accepted
    Confirmation,
}

/// Severity of a transient status notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient toast-style message shown in the status bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    created: Instant,
}

impl Notice {
    /// How long errors linger compared to informational notices
    const INFO_TTL: Duration = Duration::from_secs(4);
    const ERROR_TTL: Duration = Duration::from_secs(7);

    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        let ttl = match self.kind {
            NoticeKind::Error => Self::ERROR_TTL,
            NoticeKind::Info | NoticeKind::Success => Self::INFO_TTL,
        };
        self.created.elapsed() >= ttl
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub wizard: QuoteWizard,
    pub notice: Option<Notice>,
    /// Whether the lead API answered the startup health check
    pub api_connected: bool,
    /// True while a submission is in flight; blocks repeat submits
    pub submitting: bool,
    /// Acknowledgment reference shown on the confirmation screen
    pub confirmation_ref: Option<String>,
}

impl AppState {
    pub fn push_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice::new(kind, text));
    }

    /// Drop the notice once its display time is up
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }
}
