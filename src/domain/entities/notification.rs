//! Transient notification shown to the visitor.

use std::fmt;

/// Severity tag of a notification. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Modifier class applied to the notification element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification--info",
            Self::Success => "notification--success",
            Self::Error => "notification--error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one presented notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
        }
    }

    /// Full class list of the element, e.g. `notification notification--error`.
    pub fn class_name(&self) -> String {
        format!("notification {}", self.severity.css_class())
    }
}
