//! EmailJS REST implementation of [`EmailSender`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ports::{EmailRequest, EmailSender, TemplateParams};
use crate::error::SendError;
use crate::infrastructure::base_directory;

const SEND_PATH: &str = "api/v1.0/email/send";

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> From<&'a EmailRequest> for SendPayload<'a> {
    fn from(request: &'a EmailRequest) -> Self {
        Self {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.params,
        }
    }
}

/// Sends contact messages through the EmailJS REST API.
///
/// Any 2xx response counts as delivered; the body is not inspected. Every
/// other status, and any transport failure, is a rejection.
pub struct EmailJsSender {
    client: Client,
    endpoint: Url,
}

impl EmailJsSender {
    /// Creates a sender for the EmailJS instance at `base_url`
    /// (normally `https://api.emailjs.com`).
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Endpoint`] if the send URL cannot be built, or
    /// [`SendError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(base_url: &Url) -> Result<Self, SendError> {
        let client = Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_directory(base_url).join(SEND_PATH)?))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(&self, request: &EmailRequest) -> Result<(), SendError> {
        debug!(
            "EmailJS send: service={} template={}",
            request.service_id, request.template_id
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SendPayload::from(request))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("EmailJS rejected message: {} {}", status, body);

        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            service_id: "portfolio".into(),
            template_id: "portfolio_template".into(),
            params: TemplateParams {
                from_name: "Ada".into(),
                from_email: "ada@example.com".into(),
                message: "Hello".into(),
            },
            public_key: "pk_live".into(),
        }
    }

    #[test]
    fn test_endpoint_from_base() {
        let base = Url::parse("https://api.emailjs.com").unwrap();
        let sender = EmailJsSender::new(&base).unwrap();
        assert_eq!(
            sender.endpoint().as_str(),
            "https://api.emailjs.com/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("https://proxy.example.com/emailjs").unwrap();
        let sender = EmailJsSender::new(&base).unwrap();
        assert_eq!(
            sender.endpoint().as_str(),
            "https://proxy.example.com/emailjs/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_payload_shape() {
        let request = request();
        let json = serde_json::to_value(SendPayload::from(&request)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "portfolio",
                "template_id": "portfolio_template",
                "user_id": "pk_live",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello",
                }
            })
        );
    }
}
