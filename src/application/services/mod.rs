//! Services of the application layer.

pub mod contact_service;
pub mod notification_service;
pub mod stats_service;

pub use contact_service::{ContactService, EmailSettings, SubmissionOutcome};
pub use notification_service::{NotificationPresenter, NotificationTiming};
pub use stats_service::StatsService;
