//! Domain layer: entities, page events and port traits.
//!
//! # Architecture
//!
//! - [`entities`] - Contact submission, notification, page geometry
//! - [`events`] - Page events and the [`events::EventBus`]
//! - [`ports`] - Traits implemented by the infrastructure layer and the page
//!
//! # Design Principles
//!
//! - No dependency on HTTP clients or terminals; those live in
//!   [`crate::infrastructure`]
//! - Behaviour that needs timers or I/O lives in [`crate::application`]

pub mod entities;
pub mod events;
pub mod ports;
