//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command runs.
//!
//! ## Email Provider
//!
//! ```bash
//! export EMAILJS_PUBLIC_KEY="h_uIKVElopWuHE3eX"
//! export EMAILJS_SERVICE_ID="portfolio"            # default
//! export EMAILJS_TEMPLATE_ID="portfolio_template"  # default
//! ```
//!
//! The public key is only required by commands that send email.
//!
//! ## Optional Variables
//!
//! - `EMAILJS_API_URL` - EmailJS base URL (default: `https://api.emailjs.com`)
//! - `GITHUB_USERNAME` - Account whose statistics are shown (default: `Hemanggour`)
//! - `GITHUB_API_URL` - GitHub REST base URL (default: `https://api.github.com`)
//! - `CONTRIBUTIONS_API_URL` - Contributions API base URL
//!   (default: `https://github-contributions-api.deno.dev`)
//! - `NOTIFICATION_TIMEOUT_MS` - Time a notification stays up (default: 5000)
//! - `NOTIFICATION_EXIT_MS` - Exit animation length (default: 300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::services::{EmailSettings, NotificationTiming};

const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_CONTRIBUTIONS_API_URL: &str = "https://github-contributions-api.deno.dev";
const DEFAULT_GITHUB_USERNAME: &str = "Hemanggour";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    /// Account key sent with every message. `None` disables sending.
    pub emailjs_public_key: Option<String>,
    pub emailjs_api_url: Url,
    pub github_username: String,
    pub github_api_url: Url,
    pub contributions_api_url: Url,
    pub notification_timeout_ms: u64,
    pub notification_exit_ms: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL variable is not a valid absolute URL.
    pub fn from_env() -> Result<Self> {
        let emailjs_service_id =
            env::var("EMAILJS_SERVICE_ID").unwrap_or_else(|_| "portfolio".to_string());
        let emailjs_template_id =
            env::var("EMAILJS_TEMPLATE_ID").unwrap_or_else(|_| "portfolio_template".to_string());
        let emailjs_public_key = env::var("EMAILJS_PUBLIC_KEY").ok();

        let emailjs_api_url = Self::load_url("EMAILJS_API_URL", DEFAULT_EMAILJS_API_URL)?;
        let github_api_url = Self::load_url("GITHUB_API_URL", DEFAULT_GITHUB_API_URL)?;
        let contributions_api_url =
            Self::load_url("CONTRIBUTIONS_API_URL", DEFAULT_CONTRIBUTIONS_API_URL)?;

        let github_username =
            env::var("GITHUB_USERNAME").unwrap_or_else(|_| DEFAULT_GITHUB_USERNAME.to_string());

        let notification_timeout_ms = env::var("NOTIFICATION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let notification_exit_ms = env::var("NOTIFICATION_EXIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            emailjs_service_id,
            emailjs_template_id,
            emailjs_public_key,
            emailjs_api_url,
            github_username,
            github_api_url,
            contributions_api_url,
            notification_timeout_ms,
            notification_exit_ms,
            log_level,
            log_format,
        })
    }

    /// Reads `key` as a URL, falling back to `default` when unset.
    fn load_url(key: &str, default: &str) -> Result<Url> {
        let raw = env::var(key).unwrap_or_else(|_| default.to_string());
        Url::parse(&raw).with_context(|| format!("{key} is not a valid URL: '{raw}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - a URL does not use `http` or `https`
    /// - the EmailJS ids or the GitHub username are empty
    /// - `notification_timeout_ms` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        for (name, url) in [
            ("EMAILJS_API_URL", &self.emailjs_api_url),
            ("GITHUB_API_URL", &self.github_api_url),
            ("CONTRIBUTIONS_API_URL", &self.contributions_api_url),
        ] {
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }

        if self.emailjs_service_id.is_empty() || self.emailjs_template_id.is_empty() {
            anyhow::bail!("EMAILJS_SERVICE_ID and EMAILJS_TEMPLATE_ID must not be empty");
        }

        if let Some(key) = &self.emailjs_public_key
            && key.trim().is_empty()
        {
            anyhow::bail!("EMAILJS_PUBLIC_KEY must not be blank when set");
        }

        if self.github_username.is_empty() {
            anyhow::bail!("GITHUB_USERNAME must not be empty");
        }

        if self.notification_timeout_ms == 0 {
            anyhow::bail!("NOTIFICATION_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Provider settings for sending mail.
    ///
    /// # Errors
    ///
    /// Returns an error if `EMAILJS_PUBLIC_KEY` is not set.
    pub fn email_settings(&self) -> Result<EmailSettings> {
        let public_key = self
            .emailjs_public_key
            .clone()
            .context("EMAILJS_PUBLIC_KEY must be set to send messages")?;

        Ok(EmailSettings {
            service_id: self.emailjs_service_id.clone(),
            template_id: self.emailjs_template_id.clone(),
            public_key,
        })
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            display: Duration::from_millis(self.notification_timeout_ms),
            exit: Duration::from_millis(self.notification_exit_ms),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  EmailJS: {} / {} at {}",
            self.emailjs_service_id,
            self.emailjs_template_id,
            self.emailjs_api_url
        );

        match &self.emailjs_public_key {
            Some(key) => tracing::info!("  EmailJS key: {}", mask_secret(key)),
            None => tracing::info!("  EmailJS key: not set (sending disabled)"),
        }

        tracing::info!("  GitHub user: {}", self.github_username);
        tracing::info!("  GitHub API: {}", self.github_api_url);
        tracing::info!("  Contributions API: {}", self.contributions_api_url);
        tracing::info!(
            "  Notifications: {}ms + {}ms exit",
            self.notification_timeout_ms,
            self.notification_exit_ms
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its first three characters.
///
/// - `h_uIKVElopWuHE3eX` → `h_u***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 3 {
        return "***".to_string();
    }

    let visible: String = secret.chars().take(3).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
