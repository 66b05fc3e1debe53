//! HTTP-level integration tests for the contact page and submission flow.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_form, post_json, RecordingNotifier};
use portfolio_core::contact::{ACKNOWLEDGMENT, REQUIRED_MESSAGE};
use portfolio_db::repositories::ContactMessageRepo;
use sqlx::PgPool;

const VALID_FORM: &str =
    "name=Jane+Doe&email=jane%40example.com&subject=Kitchen+remodel&message=Please+call+me";

async fn message_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_page_renders_empty_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/contact/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["form"]["name"], "");
    assert!(json["message"].is_null());
    assert!(json["site_settings"].is_object());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_valid_submission_persists_and_redirects(pool: PgPool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with_notifier(pool.clone(), notifier.clone());

    let response = post_form(app, "/contact/", VALID_FORM).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/contact/?sent=1");

    let messages = ContactMessageRepo::list(&pool).await.unwrap();
    assert_eq!(messages.len(), 1);
    let stored = &messages[0];
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.email, "jane@example.com");
    assert_eq!(stored.phone, "");
    assert!(!stored.is_read);

    assert_eq!(notifier.delivered(), vec![stored.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_notification_failure_does_not_affect_submission(pool: PgPool) {
    let notifier = Arc::new(RecordingNotifier::failing());
    let app = common::build_test_app_with_notifier(pool.clone(), notifier.clone());

    let response = post_form(app, "/contact", VALID_FORM).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(message_count(&pool).await, 1);
    assert_eq!(notifier.delivered().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_message_rerenders_form_without_saving(pool: PgPool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with_notifier(pool.clone(), notifier.clone());

    let response = post_form(
        app,
        "/contact/",
        "name=Jane+Doe&email=jane%40example.com&subject=Kitchen+remodel&message=",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["message"][0], REQUIRED_MESSAGE);
    assert_eq!(json["form"]["name"], "Jane Doe");
    assert!(json["site_settings"].is_object());

    assert_eq!(message_count(&pool).await, 0);
    assert!(notifier.delivered().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_email_is_reported(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/contact/",
        "name=Jane&email=nope&subject=Hi&message=Hello",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["errors"]["email"].is_array());
    assert_eq!(message_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_json_submission_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/contact/",
        serde_json::json!({
            "name": "  Jane Doe  ",
            "email": "jane@example.com",
            "phone": "+91 98765 43210",
            "subject": "Kitchen remodel",
            "message": "Please call me",
            "budget": "$10k"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let messages = ContactMessageRepo::list(&pool).await.unwrap();
    assert_eq!(messages[0].name, "Jane Doe");
    assert_eq!(messages[0].budget, "$10k");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sent_flag_shows_acknowledgment(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/contact/?sent=1").await).await;

    assert_eq!(json["message"], ACKNOWLEDGMENT);
    assert_eq!(json["form"]["email"], "");
}
