//! Contact form submission model and DTOs.

use portfolio_core::contact::ContactForm;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
///
/// Rows are written once by the public contact form; the management side
/// may only toggle `is_read`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub project_type: String,
    pub budget: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a validated submission.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub project_type: String,
    pub budget: String,
}

impl From<ContactForm> for CreateContactMessage {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            subject: form.subject,
            message: form.message,
            project_type: form.project_type,
            budget: form.budget,
        }
    }
}

/// DTO for marking a message read or unread.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReadStatus {
    pub is_read: bool,
}
