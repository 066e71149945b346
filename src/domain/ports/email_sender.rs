//! Port for the external transactional email service.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::ContactSubmission;
use crate::error::SendError;

/// Template variables filled in by the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl From<&ContactSubmission> for TemplateParams {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            message: submission.message.clone(),
        }
    }
}

/// Everything the provider needs to send one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
    /// Public key identifying the account to the provider.
    pub public_key: String,
}

/// Sends a templated email.
///
/// The outcome has exactly two states: `Ok(())` when the provider accepted
/// the message and `Err` for anything else. No response payload is inspected.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::EmailJsSender`] - EmailJS REST API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SendError`] on transport failure or provider rejection.
    async fn send(&self, request: &EmailRequest) -> Result<(), SendError>;
}
