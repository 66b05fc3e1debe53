//! Route definitions for the content-management API.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin::{
    authors, blog_posts, categories, contact_messages, project_images, projects, services,
    site_settings, team, testimonials,
};
use crate::state::AppState;

/// Routes mounted at `/api/v1/admin`.
///
/// Contact messages have no create or delete and site settings have no
/// delete; those methods answer 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            get(categories::get_by_id)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/projects/{id}/images",
            get(projects::list_images).post(projects::add_image),
        )
        .route(
            "/project-images/{id}",
            put(project_images::update).delete(project_images::delete),
        )
        .route("/services", get(services::list).post(services::create))
        .route(
            "/services/{id}",
            get(services::get_by_id)
                .put(services::update)
                .delete(services::delete),
        )
        .route("/team", get(team::list).post(team::create))
        .route(
            "/team/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
        .route(
            "/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route(
            "/testimonials/{id}",
            get(testimonials::get_by_id)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
        .route("/blog-posts", get(blog_posts::list).post(blog_posts::create))
        .route(
            "/blog-posts/{id}",
            get(blog_posts::get_by_id)
                .put(blog_posts::update)
                .delete(blog_posts::delete),
        )
        .route("/authors", get(authors::list).post(authors::create))
        .route("/contact-messages", get(contact_messages::list))
        .route(
            "/contact-messages/{id}",
            get(contact_messages::get_by_id).patch(contact_messages::set_read),
        )
        .route(
            "/site-settings",
            get(site_settings::get)
                .post(site_settings::create)
                .put(site_settings::update),
        )
}
