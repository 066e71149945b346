//! Page events and the subscription bus that dispatches them.
//!
//! The browser is the publisher; the [`crate::application::PageController`]
//! registers one handler per event kind it cares about.

use std::collections::HashMap;

use crate::domain::entities::NotificationId;

/// Events the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Document finished loading. Carries the URL fragment, e.g. `#about`.
    DomContentLoaded { hash: Option<String> },
    /// The hamburger button was clicked.
    NavToggleClick,
    /// A navigation menu link was clicked.
    NavLinkClick { href: String },
    /// Any click on the document.
    DocumentClick { inside_nav: bool },
    /// A same-page anchor (`href="#..."`) was clicked.
    AnchorClick { href: String },
    /// The window scrolled to `top`.
    Scroll { top: f64 },
    /// The window was resized to `width`.
    Resize { width: f64 },
    /// The contact form was submitted.
    Submit,
    /// The close button of a notification was clicked.
    NotificationClose { id: NotificationId },
}

/// Discriminant of [`PageEvent`] used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DomContentLoaded,
    NavToggleClick,
    NavLinkClick,
    DocumentClick,
    AnchorClick,
    Scroll,
    Resize,
    Submit,
    NotificationClose,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DomContentLoaded { .. } => EventKind::DomContentLoaded,
            Self::NavToggleClick => EventKind::NavToggleClick,
            Self::NavLinkClick { .. } => EventKind::NavLinkClick,
            Self::DocumentClick { .. } => EventKind::DocumentClick,
            Self::AnchorClick { .. } => EventKind::AnchorClick,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
            Self::Submit => EventKind::Submit,
            Self::NotificationClose { .. } => EventKind::NotificationClose,
        }
    }
}

type Handler = Box<dyn Fn(&PageEvent) + Send + Sync>;

/// Named handlers registered against event kinds.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every event of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&PageEvent) + Send + Sync + 'static,
    {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Box::new(handler));
    }

    /// Runs every handler registered for the event's kind, in registration
    /// order. Returns how many handlers ran.
    pub fn publish(&self, event: &PageEvent) -> usize {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::trace!(kind = ?event.kind(), "No handlers for event");
            return 0;
        };

        for handler in handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        f.debug_struct("EventBus").field("handlers", &counts).finish()
    }
}
