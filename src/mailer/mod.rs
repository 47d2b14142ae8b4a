//! Outbound email delivery.
//!
//! Mail goes out through an HTTP mail gateway (JSON POST), the same way the
//! rest of the service talks to external systems. Delivery is a single
//! synchronous attempt per message; callers treat failures as non-fatal and
//! record them (`email_sent = false`) rather than retrying.

pub mod templates;

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub use templates::RenderedEmail;

/// A fully rendered email ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundEmail {
    pub fn new(to: impl Into<String>, rendered: RenderedEmail) -> Self {
        Self {
            to: to.into(),
            subject: rendered.subject,
            text_body: rendered.text,
            html_body: rendered.html,
        }
    }
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Mail gateway request failed: {0}")]
    Transport(String),

    #[error("Mail gateway rejected the message with status {0}")]
    Rejected(u16),

    #[error("No mail gateway configured")]
    NotConfigured,
}

/// Email delivery abstraction. The production implementation posts to an HTTP
/// mail gateway; tests substitute recording or failing implementations.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError>;
}

/// Wire payload accepted by the mail gateway.
#[derive(Debug, Serialize)]
struct GatewayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Mailer that delivers through an HTTP mail gateway.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    from: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, from: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap(),
            endpoint,
            from,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
        let payload = GatewayPayload {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.text_body,
            html: &email.html_body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        if response.status().is_success() {
            info!(to = %email.to, subject = %email.subject, "Email delivered");
            Ok(())
        } else {
            warn!(
                to = %email.to,
                status = response.status().as_u16(),
                "Mail gateway rejected message"
            );
            Err(MailerError::Rejected(response.status().as_u16()))
        }
    }
}

/// Mailer used when no gateway endpoint is configured. Every send fails with
/// `NotConfigured` so callers record the email as unsent; the message content
/// is logged for local development.
#[derive(Debug, Clone, Default)]
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
        warn!(
            to = %email.to,
            subject = %email.subject,
            "No mail gateway configured; dropping email"
        );
        Err(MailerError::NotConfigured)
    }
}
