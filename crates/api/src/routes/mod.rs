pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/categories                        list (with project counts), create
/// /admin/categories/{id}                   get, update, delete
/// /admin/projects                          list (with image counts), create
/// /admin/projects/{id}                     get, update, delete
/// /admin/projects/{id}/images              list, add
/// /admin/project-images/{id}               update, delete
/// /admin/services                          list, create
/// /admin/services/{id}                     get, update, delete
/// /admin/team                              list, create
/// /admin/team/{id}                         get, update, delete
/// /admin/testimonials                      list, create
/// /admin/testimonials/{id}                 get, update, delete
/// /admin/blog-posts                        list (incl. drafts), create
/// /admin/blog-posts/{id}                   get, update, delete
/// /admin/authors                           list, create
/// /admin/contact-messages                  list
/// /admin/contact-messages/{id}             get, mark read/unread (PATCH)
/// /admin/site-settings                     get, create (409 if present), update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/admin", admin::router())
}
