//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod author;
pub mod blog_post;
pub mod category;
pub mod contact_message;
pub mod project;
pub mod project_image;
pub mod service;
pub mod site_settings;
pub mod team_member;
pub mod testimonial;
