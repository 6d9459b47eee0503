// Capability interface over the host's rendering layer. Toasts, modal
// confirmations and positioned hints are rendering concerns; this crate only
// defines the messages and the seam they travel through.

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Severity of a transient message, matching the flash categories used by
/// the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// A transient message, dismissed automatically after `duration`.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A modal yes/no question.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Confirmation {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Confirmation {
            title: title.into(),
            message: message.into(),
            confirm_label: "OK".to_string(),
            cancel_label: "Batal".to_string(),
        }
    }
}

/// A hint positioned near its anchor, e.g. a tooltip.
#[derive(Debug, Clone)]
pub struct Hint {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// The surface the host UI supplies: something that can display a transient
/// message, ask a modal confirmation and show a positioned hint. How any of
/// this is rendered is entirely the host's business.
pub trait UiSurface {
    fn show_toast(&mut self, toast: Toast);

    /// Blocks on the user's answer; `true` means confirmed.
    fn confirm(&mut self, request: &Confirmation) -> bool;

    fn show_hint(&mut self, hint: Hint);
}

/// Headless surface for the demo binary and for hosts without a rendering
/// layer: messages go to the log, confirmations get a fixed answer.
#[derive(Debug, Clone)]
pub struct LoggingSurface {
    pub assume_confirmed: bool,
}

impl Default for LoggingSurface {
    fn default() -> Self {
        LoggingSurface {
            assume_confirmed: true,
        }
    }
}

impl UiSurface for LoggingSurface {
    fn show_toast(&mut self, toast: Toast) {
        tracing::info!(kind = toast.kind.as_str(), "{}", toast.message);
    }

    fn confirm(&mut self, request: &Confirmation) -> bool {
        tracing::info!(
            title = %request.title,
            answer = self.assume_confirmed,
            "{}",
            request.message
        );
        self.assume_confirmed
    }

    fn show_hint(&mut self, hint: Hint) {
        tracing::debug!(x = hint.x, y = hint.y, "{}", hint.text);
    }
}
