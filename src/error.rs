//! Error types for the contact flow, email dispatch and statistics fetches.
//!
//! None of these are fatal. Validation and send failures end up as a
//! notification, statistics failures as a `"N/A"` placeholder. [`AppError`]
//! aggregates them for callers (the CLI) that want a single error type.

use thiserror::Error;

/// Rejection of a contact form submission before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One of `name`, `email` or `message` is empty or absent.
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// The email field does not look like `local@domain.tld`.
    #[error("invalid email: {email}")]
    InvalidEmail { email: String },
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    /// Text shown to the visitor for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Please fill in all fields",
            Self::InvalidEmail { .. } => "Please enter a valid email address",
        }
    }
}

/// Failure of the external email provider call.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("email transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid email endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Failure while loading a GitHub statistic.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("stats endpoint returned status {0}")]
    Status(u16),

    #[error("unexpected stats payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid stats endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Top-level error for callers that drive the whole page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
