//! Studio notifications for new contact submissions.
//!
//! The contact flow calls [`notify_silently`] after the submission is
//! committed. Delivery is bounded by a timeout and every failure is logged
//! and swallowed, so the visitor always gets their acknowledgment.

use std::time::Duration;

use async_trait::async_trait;
use portfolio_db::models::contact_message::ContactMessage;

pub mod email;
pub mod message;

pub use email::{EmailConfig, SmtpNotifier};
pub use message::{compose, OutgoingMessage};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Delivers a notification about a persisted contact submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError>;

    /// Whether this notifier actually delivers anything.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Notifier used when no SMTP host is configured. Sends nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl ContactNotifier for DisabledNotifier {
    async fn notify(&self, _message: &ContactMessage) -> Result<(), NotifyError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Outcome of a fail-silent notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Skipped,
    Failed,
    TimedOut,
}

/// Send a notification for `message`, never propagating failure.
///
/// Errors are logged at `warn`; an attempt still pending after `timeout`
/// is abandoned.
pub async fn notify_silently(
    notifier: &dyn ContactNotifier,
    message: &ContactMessage,
    timeout: Duration,
) -> Delivery {
    if !notifier.is_enabled() {
        tracing::debug!(
            contact_message_id = message.id,
            "Notifications disabled, skipping",
        );
        return Delivery::Skipped;
    }

    match tokio::time::timeout(timeout, notifier.notify(message)).await {
        Ok(Ok(())) => Delivery::Sent,
        Ok(Err(e)) => {
            tracing::warn!(
                contact_message_id = message.id,
                error = %e,
                "Contact notification failed",
            );
            Delivery::Failed
        }
        Err(_) => {
            tracing::warn!(
                contact_message_id = message.id,
                timeout_secs = timeout.as_secs(),
                "Contact notification timed out",
            );
            Delivery::TimedOut
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
