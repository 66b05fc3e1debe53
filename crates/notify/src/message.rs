//! Plain-text composition of the contact notification email.

use portfolio_db::models::contact_message::ContactMessage;

/// Subject and body of an outgoing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub subject: String,
    pub body: String,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Build the notification sent to the studio for a new submission.
pub fn compose(message: &ContactMessage) -> OutgoingMessage {
    let body = format!(
        "New Contact Form Submission from Ctrin Interiors Website\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Subject: {subject}\n\
         \n\
         Project Type: {project_type}\n\
         Budget: {budget}\n\
         \n\
         Message:\n\
         {body}\n\
         \n\
         ---\n\
         This is an automated message from your website contact form.\n",
        name = message.name,
        email = message.email,
        phone = or_placeholder(&message.phone, "Not provided"),
        subject = message.subject,
        project_type = or_placeholder(&message.project_type, "Not specified"),
        budget = or_placeholder(&message.budget, "Not specified"),
        body = message.message,
    );

    OutgoingMessage {
        subject: format!("New Contact Form: {}", message.subject),
        body,
    }
}
