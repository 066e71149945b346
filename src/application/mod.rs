//! Application layer: the behaviour of the page.
//!
//! Services consume the port traits from [`crate::domain::ports`] and never
//! touch HTTP or the terminal directly.
//!
//! # Available Services
//!
//! - [`services::NotificationPresenter`] - One auto-dismissing notification at a time
//! - [`services::ContactService`] - Contact form validation and email dispatch
//! - [`services::StatsService`] - GitHub statistics with `"N/A"` fallback
//!
//! [`PageController`] owns the page state and connects all of them to the
//! [`crate::domain::events::EventBus`].

pub mod page_controller;
pub mod services;

pub use page_controller::{PageController, PageParts};
