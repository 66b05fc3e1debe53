//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod blog_post_repo;
pub mod category_repo;
pub mod contact_message_repo;
pub mod project_image_repo;
pub mod project_repo;
pub mod service_repo;
pub mod site_settings_repo;
pub mod team_member_repo;
pub mod testimonial_repo;

pub use author_repo::AuthorRepo;
pub use blog_post_repo::BlogPostRepo;
pub use category_repo::CategoryRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use team_member_repo::TeamMemberRepo;
pub use testimonial_repo::TestimonialRepo;
