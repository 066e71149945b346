//! Port traits the application layer drives.
//!
//! These abstract the outside world the same way repositories abstract a
//! database: the page itself ("surfaces") and the two remote services.
//!
//! # Available Ports
//!
//! - [`EmailSender`] - Transactional email provider
//! - [`GithubStatsClient`] - GitHub contribution and repository counts
//! - [`NotificationSurface`], [`FormSurface`], [`PageSurface`] - The rendered page
//!
//! Mock implementations of the async ports are generated via `mockall` for
//! unit tests. Integration tests use the recording surfaces in `tests/common`.

pub mod email_sender;
pub mod stats_client;
pub mod surface;

pub use email_sender::{EmailRequest, EmailSender, TemplateParams};
pub use stats_client::GithubStatsClient;
pub use surface::{FormSurface, NotificationSurface, PageSurface};

#[cfg(test)]
pub use email_sender::MockEmailSender;
#[cfg(test)]
pub use stats_client::MockGithubStatsClient;
