//! Handlers for the content-management API under `/api/v1/admin`.
//!
//! Every handler takes [`RequireAdmin`](crate::middleware::admin::RequireAdmin)
//! and wraps its payload in [`DataResponse`](crate::response::DataResponse).

pub mod authors;
pub mod blog_posts;
pub mod categories;
pub mod contact_messages;
pub mod project_images;
pub mod projects;
pub mod services;
pub mod site_settings;
pub mod team;
pub mod testimonials;

use portfolio_core::error::CoreError;
use portfolio_core::slug::validate_slug;

/// Reject a blank or overlong required text field.
pub(crate) fn require_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    limit_text(field, Some(value), max)
}

/// Reject an overlong optional text field.
pub(crate) fn limit_text(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > max => Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Validate an editor-supplied slug. Blank means "derive it".
pub(crate) fn check_slug(slug: Option<&str>) -> Result<(), CoreError> {
    match slug.map(str::trim) {
        Some(s) if !s.is_empty() => validate_slug(s),
        _ => Ok(()),
    }
}
