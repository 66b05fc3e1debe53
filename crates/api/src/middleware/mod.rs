//! Request guards and response post-processing.
//!
//! - [`admin::RequireAdmin`] -- Requires the management bearer token.
//! - [`error_page::render_error_pages`] -- Attaches site settings to public 404/500 responses.

pub mod admin;
pub mod error_page;
