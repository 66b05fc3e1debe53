//! Route definitions for the public site pages.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::{blog, contact, home, projects, studio};
use crate::state::AppState;

/// Public pages, each served with and without a trailing slash.
///
/// ```text
/// GET        /                     -> home
/// GET        /projects/            -> project listing (?category=&page=)
/// GET        /projects/{slug}/     -> project detail
/// GET        /services/            -> services
/// GET        /team/                -> team
/// GET        /blog/                -> blog listing (?page=)
/// GET        /blog/{slug}/         -> blog post detail
/// GET, POST  /contact/             -> contact page, form submission
/// ```
pub fn router() -> Router<AppState> {
    let pages: Vec<(&str, MethodRouter<AppState>)> = vec![
        ("/projects", get(projects::list)),
        ("/projects/{slug}", get(projects::detail)),
        ("/services", get(studio::services)),
        ("/team", get(studio::team)),
        ("/blog", get(blog::list)),
        ("/blog/{slug}", get(blog::detail)),
        ("/contact", get(contact::page).post(contact::submit)),
    ];

    pages.into_iter().fold(
        Router::new().route("/", get(home::home)),
        |router, (path, route)| {
            router
                .route(&format!("{path}/"), route.clone())
                .route(path, route)
        },
    )
}
