//! Handlers for the contact page and contact form submission.
//!
//! A valid submission is persisted, the studio is notified (bounded and
//! fail-silent), and the visitor is redirected back to the contact page
//! with `?sent=1`. An invalid submission re-renders the form with field
//! errors and stores nothing.

use std::time::Duration;

use axum::extract::{FromRequest, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use portfolio_core::contact::{ContactForm, FieldErrors, ACKNOWLEDGMENT};
use portfolio_db::models::contact_message::CreateContactMessage;
use portfolio_db::repositories::ContactMessageRepo;
use portfolio_notify::notify_silently;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::site_settings;
use crate::query::ContactPageParams;
use crate::state::AppState;
use crate::views::SiteSettingsView;

/// Where a successful submission lands.
pub const SENT_REDIRECT: &str = "/contact/?sent=1";

#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub form: ContactForm,
    pub errors: FieldErrors,
    /// Acknowledgment flash shown after a successful submission.
    pub message: Option<&'static str>,
    pub site_settings: SiteSettingsView,
}

/// A contact form body, accepted as JSON or `application/x-www-form-urlencoded`.
pub struct ContactSubmission(pub ContactForm);

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let form = if is_json {
            let Json(form) = Json::<ContactForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form
        } else {
            let Form(form) = Form::<ContactForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form
        };
        Ok(ContactSubmission(form))
    }
}

/// GET /contact/
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<ContactPageParams>,
) -> AppResult<Json<ContactPage>> {
    Ok(Json(ContactPage {
        form: ContactForm::default(),
        errors: FieldErrors::new(),
        message: params.was_sent().then_some(ACKNOWLEDGMENT),
        site_settings: site_settings(&state).await?,
    }))
}

/// POST /contact/
pub async fn submit(
    State(state): State<AppState>,
    ContactSubmission(form): ContactSubmission,
) -> AppResult<Response> {
    let form = form.trimmed();

    if let Err(errors) = form.check() {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Contact form rejected");
        let page = ContactPage {
            form,
            errors,
            message: None,
            site_settings: site_settings(&state).await?,
        };
        return Ok(Json(page).into_response());
    }

    let input = CreateContactMessage::from(form);
    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_message_id = message.id, "Contact message received");

    let timeout = Duration::from_secs(state.config.notify_timeout_secs);
    notify_silently(state.notifier.as_ref(), &message, timeout).await;

    Ok(Redirect::to(SENT_REDIRECT).into_response())
}
