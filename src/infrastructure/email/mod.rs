//! Email provider adapters.

mod emailjs;

pub use emailjs::EmailJsSender;
