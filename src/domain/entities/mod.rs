//! Core domain entities.
//!
//! - [`ContactSubmission`] - One submission of the contact form
//! - [`Notification`] - Transient message with a [`Severity`]
//! - [`PageLayout`] - Section geometry used for scroll-spy and anchor scrolling

pub mod contact;
pub mod notification;
pub mod page;

pub use contact::{ContactSubmission, is_valid_email};
pub use notification::{Notification, NotificationId, Severity};
pub use page::{HeaderState, NavState, PageLayout, Section};
