//! Contact form validation and submission.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::services::NotificationPresenter;
use crate::domain::entities::{ContactSubmission, Severity};
use crate::domain::ports::{EmailRequest, EmailSender, FormSurface, TemplateParams};
use crate::error::{SendError, ValidationError};

pub const SENDING_MESSAGE: &str = "Sending message...";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Provider account settings used for every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailSettings {
    fn request_for(&self, submission: &ContactSubmission) -> EmailRequest {
        EmailRequest {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            params: TemplateParams::from(submission),
            public_key: self.public_key.clone(),
        }
    }
}

/// Terminal state of one submit.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Rejected before sending; the form keeps its input.
    Invalid(ValidationError),
    /// The provider accepted the message; the form was cleared.
    Sent,
    /// The provider call failed; the form keeps its input for a retry.
    Failed(SendError),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Validates the contact form and hands valid submissions to the email provider.
///
/// Each phase shows exactly one notification: the validation error, or
/// "Sending message..." followed by either the success or the failure
/// message. There is no retry and no timeout; the visitor resubmits by hand.
pub struct ContactService<E: EmailSender> {
    sender: Arc<E>,
    presenter: Arc<NotificationPresenter>,
    settings: EmailSettings,
}

impl<E: EmailSender> ContactService<E> {
    pub fn new(
        sender: Arc<E>,
        presenter: Arc<NotificationPresenter>,
        settings: EmailSettings,
    ) -> Self {
        Self {
            sender,
            presenter,
            settings,
        }
    }

    /// Runs the whole submit flow against `form`.
    pub async fn submit(&self, form: &dyn FormSurface) -> SubmissionOutcome {
        let submission = ContactSubmission::from_form(form);

        if let Err(err) = submission.check() {
            warn!(error = %err, "Contact form rejected");
            self.presenter.present(err.user_message(), Severity::Error);
            return SubmissionOutcome::Invalid(err);
        }

        self.presenter.present(SENDING_MESSAGE, Severity::Info);

        let request = self.settings.request_for(&submission);
        match self.sender.send(&request).await {
            Ok(()) => {
                info!(template = %request.template_id, "Contact message sent");
                self.presenter.present(SENT_MESSAGE, Severity::Success);
                form.reset();
                SubmissionOutcome::Sent
            }
            Err(err) => {
                error!(error = %err, "Failed to send contact message");
                self.presenter.present(SEND_FAILED_MESSAGE, Severity::Error);
                SubmissionOutcome::Failed(err)
            }
        }
    }
}
