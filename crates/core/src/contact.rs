//! Contact form input and validation.
//!
//! Validation produces field-scoped messages so the form can be re-rendered
//! with errors next to the offending inputs. Nothing is persisted unless
//! [`ContactForm::check`] succeeds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Message shown for a required field left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Flash text shown on the contact page after a successful submission.
pub const ACKNOWLEDGMENT: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";

/// Field name to error messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A contact submission as typed by the visitor.
///
/// Optional inputs (`phone`, `project_type`, `budget`) are stored as empty
/// strings when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(max = 200, message = "Ensure this value has at most 200 characters."))]
    pub name: String,

    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this value has at most 254 characters.")
    )]
    pub email: String,

    #[validate(length(max = 20, message = "Ensure this value has at most 20 characters."))]
    pub phone: String,

    #[validate(length(max = 300, message = "Ensure this value has at most 300 characters."))]
    pub subject: String,

    pub message: String,

    #[validate(length(max = 100, message = "Ensure this value has at most 100 characters."))]
    pub project_type: String,

    #[validate(length(max = 100, message = "Ensure this value has at most 100 characters."))]
    pub budget: String,
}

impl ContactForm {
    /// Strip surrounding whitespace from every input.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            project_type: self.project_type.trim().to_string(),
            budget: self.budget.trim().to_string(),
        }
    }

    /// Validate the submission, collecting every field error.
    ///
    /// A blank required field reports only [`REQUIRED_MESSAGE`], even when
    /// other rules (such as the email format) would also fail on it.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => collect_field_errors(&e),
        };

        for (field, value) in self.required_fields() {
            if value.is_empty() {
                errors.insert(field.to_string(), vec![REQUIRED_MESSAGE.to_string()]);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }
}

fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Kitchen remodel".into(),
            message: "Please call me".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid_form().check().is_ok());
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let form = ContactForm {
            phone: String::new(),
            project_type: String::new(),
            budget: String::new(),
            ..valid_form()
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn empty_message_is_required() {
        let form = ContactForm {
            message: String::new(),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["message"], vec![REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn whitespace_only_counts_as_blank_after_trim() {
        let form = ContactForm {
            name: "   ".into(),
            ..valid_form()
        }
        .trimmed();
        let errors = form.check().unwrap_err();
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn malformed_email_is_reported() {
        let form = ContactForm {
            email: "not-an-email".into(),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors["email"], vec!["Enter a valid email address.".to_string()]);
    }

    #[test]
    fn blank_email_reports_required_only() {
        let form = ContactForm {
            email: String::new(),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors["email"], vec![REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn overlong_phone_is_reported() {
        let form = ContactForm {
            phone: "1".repeat(21),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert!(errors["phone"][0].contains("at most 20"));
    }

    #[test]
    fn collects_every_failing_field() {
        let errors = ContactForm::default().check().unwrap_err();
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["email", "message", "name", "subject"]);
    }
}
