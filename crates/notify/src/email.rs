//! Contact notification delivery via SMTP.
//!
//! [`SmtpNotifier`] wraps the `lettre` async SMTP transport to send the
//! plain-text notification to the studio inbox. Configuration is loaded from
//! environment variables; if `SMTP_HOST` is not set, [`EmailConfig::from_env`]
//! returns `None` and the caller should fall back to
//! [`DisabledNotifier`](crate::DisabledNotifier).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use portfolio_db::models::contact_message::ContactMessage;

use crate::message::compose;
use crate::{ContactNotifier, NotifyError};

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@sierrainteriors.in";

/// Configuration for the SMTP transport.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that notification
    /// delivery is disabled.
    ///
    /// | Variable        | Required | Default                      |
    /// |-----------------|----------|------------------------------|
    /// | `SMTP_HOST`     | yes      |                              |
    /// | `SMTP_PORT`     | no       | `587`                        |
    /// | `SMTP_FROM`     | no       | `noreply@sierrainteriors.in` |
    /// | `SMTP_USER`     | no       |                              |
    /// | `SMTP_PASSWORD` | no       |                              |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// SmtpNotifier
// ---------------------------------------------------------------------------

/// Sends contact notifications to a fixed recipient via SMTP.
pub struct SmtpNotifier {
    from_address: String,
    recipient: String,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    /// Build the transport for `config`, delivering to `recipient`.
    ///
    /// No connection is opened until the first send.
    pub fn new(config: &EmailConfig, recipient: impl Into<String>) -> Result<Self, NotifyError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            from_address: config.from_address.clone(),
            recipient: recipient.into(),
            mailer: builder.build(),
        })
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let outgoing = compose(message);

        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(self.recipient.parse()?)
            .subject(outgoing.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(outgoing.body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        self.mailer.send(email).await?;

        tracing::info!(
            to = %self.recipient,
            contact_message_id = message.id,
            "Contact notification sent",
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            smtp_user: None,
            smtp_password: None,
        }
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }

    #[tokio::test]
    async fn invalid_recipient_is_an_address_error() {
        let notifier = SmtpNotifier::new(&config(), "not-an-email").unwrap();
        let err = notifier
            .notify(&crate::message::tests::sample_message())
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::Address(_)));
    }
}
