//! The rendered page, split by the parts each service writes to.
//!
//! Surface calls are treated as infallible, like DOM insertion and removal.

use crate::domain::entities::{HeaderState, Notification, NotificationId};

/// Where notifications are attached.
pub trait NotificationSurface: Send + Sync {
    /// Attaches a new notification element with its close control.
    fn mount(&self, notification: &Notification);

    /// Starts the slide-out animation of an attached notification.
    fn begin_exit(&self, id: NotificationId);

    /// Detaches a notification element.
    fn remove(&self, id: NotificationId);
}

/// The contact form.
pub trait FormSurface: Send + Sync {
    /// Current value of the named field, `None` if the form has no such field.
    fn field(&self, name: &str) -> Option<String>;

    /// Clears every field.
    fn reset(&self);
}

/// Everything else on the page the controller touches.
pub trait PageSurface: Send + Sync {
    /// Replaces the text of the element matching `selector`.
    fn set_text(&self, selector: &str, text: &str);

    /// Opens or closes the mobile menu and locks body scrolling while open.
    fn set_menu_open(&self, open: bool);

    fn set_header_state(&self, state: HeaderState);

    /// Highlights the nav link pointing at `#section`, or none.
    fn set_active_link(&self, section: Option<&str>);

    /// Smooth-scrolls the window to `top`.
    fn scroll_to(&self, top: f64);

    /// Pushes `hash` (e.g. `#about`) onto the history stack.
    fn push_hash(&self, hash: &str);
}
