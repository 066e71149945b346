//! A page surface that prints to stdout.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::{ColoredString, Colorize};
use tracing::debug;

use crate::domain::entities::contact::CONTACT_FIELDS;
use crate::domain::entities::{HeaderState, Notification, NotificationId, Severity};
use crate::domain::ports::{FormSurface, NotificationSurface, PageSurface};

/// Renders notifications and element text as coloured terminal lines and
/// holds the contact form values in memory.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    fields: Mutex<HashMap<String, String>>,
    texts: Mutex<HashMap<String, String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose contact form is pre-filled.
    pub fn with_form(name: &str, email: &str, message: &str) -> Self {
        let surface = Self::default();
        {
            let mut fields = lock(&surface.fields);
            for (field, value) in CONTACT_FIELDS.into_iter().zip([name, email, message]) {
                fields.insert(field.to_string(), value.to_string());
            }
        }
        surface
    }

    /// Last text written to `selector`.
    pub fn text(&self, selector: &str) -> Option<String> {
        lock(&self.texts).get(selector).cloned()
    }
}

fn badge(severity: Severity) -> ColoredString {
    let label = format!("[{severity}]");
    match severity {
        Severity::Info => label.cyan().bold(),
        Severity::Success => label.green().bold(),
        Severity::Error => label.red().bold(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NotificationSurface for TerminalSurface {
    fn mount(&self, notification: &Notification) {
        println!("{} {}", badge(notification.severity), notification.message);
    }

    fn begin_exit(&self, id: NotificationId) {
        debug!("Notification {} leaving", id);
    }

    fn remove(&self, id: NotificationId) {
        debug!("Notification {} removed", id);
    }
}

impl FormSurface for TerminalSurface {
    fn field(&self, name: &str) -> Option<String> {
        lock(&self.fields).get(name).cloned()
    }

    fn reset(&self) {
        for value in lock(&self.fields).values_mut() {
            value.clear();
        }
        println!("{}", "Form cleared".dimmed());
    }
}

impl PageSurface for TerminalSurface {
    fn set_text(&self, selector: &str, text: &str) {
        println!("{} {}", selector.bold(), text);
        lock(&self.texts).insert(selector.to_string(), text.to_string());
    }

    fn set_menu_open(&self, open: bool) {
        debug!("Menu open: {}", open);
    }

    fn set_header_state(&self, state: HeaderState) {
        debug!(
            "Header condensed={} hidden={}",
            state.condensed, state.hidden
        );
    }

    fn set_active_link(&self, section: Option<&str>) {
        match section {
            Some(id) => println!("{} #{}", "Active section:".bold(), id.green()),
            None => println!("{} {}", "Active section:".bold(), "none".dimmed()),
        }
    }

    fn scroll_to(&self, top: f64) {
        debug!("Scroll to {}", top);
    }

    fn push_hash(&self, hash: &str) {
        debug!("History hash {}", hash);
    }
}
