//! # Portfolio Site
//!
//! Behaviour layer of a single-page portfolio site: contact form with email
//! dispatch, transient notifications, mobile navigation, scroll-spy and
//! GitHub statistics.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, page events and port traits
//! - **Application Layer** ([`application`]) - Notification presenter, contact
//!   and statistics services, and the [`PageController`]
//! - **Infrastructure Layer** ([`infrastructure`]) - EmailJS and GitHub HTTP
//!   clients, terminal surface
//!
//! ## Flow
//!
//! The page publishes [`domain::events::PageEvent`]s on an
//! [`domain::events::EventBus`]; the [`PageController`] installed on the bus
//! reacts to them. A contact submission is validated, announced with
//! "Sending message...", handed to the [`domain::ports::EmailSender`], and
//! concluded with a success or failure notification.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::PageController;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ContactService, EmailSettings, NotificationPresenter, NotificationTiming, StatsService,
        SubmissionOutcome,
    };
    pub use crate::application::{PageController, PageParts};
    pub use crate::domain::entities::{
        ContactSubmission, HeaderState, Notification, NotificationId, PageLayout, Section,
        Severity,
    };
    pub use crate::domain::events::{EventBus, EventKind, PageEvent};
    pub use crate::domain::ports::{
        EmailRequest, EmailSender, FormSurface, GithubStatsClient, NotificationSurface,
        PageSurface, TemplateParams,
    };
    pub use crate::error::{AppError, SendError, StatsError, ValidationError};
}
