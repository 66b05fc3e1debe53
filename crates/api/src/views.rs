//! Page payload types.
//!
//! Each view flattens a database row and adds the derived display fields a
//! template needs: public media URLs, split delimited lists, position labels
//! and star ratings.

use std::str::FromStr;

use portfolio_core::content::{media_url, split_delimited, star_rating};
use portfolio_core::team::TeamPosition;
use portfolio_db::models::blog_post::PublishedPost;
use portfolio_db::models::project::{Project, ProjectWithImageCount};
use portfolio_db::models::project_image::ProjectImage;
use portfolio_db::models::service::Service;
use portfolio_db::models::site_settings::SiteSettings;
use portfolio_db::models::team_member::TeamMember;
use portfolio_db::models::testimonial::Testimonial;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SiteSettingsView {
    #[serde(flatten)]
    pub settings: SiteSettings,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
}

impl SiteSettingsView {
    pub fn new(settings: SiteSettings, media: &str) -> Self {
        Self {
            logo_url: media_url(media, &settings.logo),
            favicon_url: media_url(media, &settings.favicon),
            settings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub featured_image_url: Option<String>,
}

impl ProjectView {
    pub fn new(project: Project, media: &str) -> Self {
        Self {
            featured_image_url: media_url(media, &project.featured_image),
            project,
        }
    }
}

/// Management list row: a project, its gallery size and its thumbnail URL.
#[derive(Debug, Serialize)]
pub struct ProjectRowView {
    #[serde(flatten)]
    pub row: ProjectWithImageCount,
    pub thumbnail_url: Option<String>,
}

impl ProjectRowView {
    pub fn new(row: ProjectWithImageCount, media: &str) -> Self {
        Self {
            thumbnail_url: media_url(media, &row.project.featured_image),
            row,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectImageView {
    #[serde(flatten)]
    pub image: ProjectImage,
    pub image_url: Option<String>,
}

impl ProjectImageView {
    pub fn new(image: ProjectImage, media: &str) -> Self {
        Self {
            image_url: media_url(media, &image.image),
            image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceView {
    #[serde(flatten)]
    pub service: Service,
    pub feature_list: Vec<String>,
    pub image_url: Option<String>,
}

impl ServiceView {
    pub fn new(service: Service, media: &str) -> Self {
        Self {
            feature_list: split_delimited(&service.features),
            image_url: media_url(media, &service.image),
            service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    #[serde(flatten)]
    pub member: TeamMember,
    pub position_label: String,
    pub image_url: Option<String>,
}

impl TeamMemberView {
    pub fn new(member: TeamMember, media: &str) -> Self {
        let position_label = TeamPosition::from_str(&member.position)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|_| member.position.clone());
        Self {
            position_label,
            image_url: media_url(media, &member.image),
            member,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TestimonialView {
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub stars: String,
    pub client_image_url: Option<String>,
}

impl TestimonialView {
    pub fn new(testimonial: Testimonial, media: &str) -> Self {
        Self {
            stars: star_rating(testimonial.rating),
            client_image_url: media_url(media, &testimonial.client_image),
            testimonial,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: PublishedPost,
    pub tag_list: Vec<String>,
    pub featured_image_url: Option<String>,
}

impl PostView {
    pub fn new(post: PublishedPost, media: &str) -> Self {
        Self {
            tag_list: split_delimited(&post.post.tags),
            featured_image_url: media_url(media, &post.post.featured_image),
            post,
        }
    }
}

/// Convert a list of rows into views sharing the same media base.
pub fn all<T, V>(rows: Vec<T>, media: &str, view: fn(T, &str) -> V) -> Vec<V> {
    rows.into_iter().map(|row| view(row, media)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn member(position: &str) -> TeamMember {
        TeamMember {
            id: 1,
            name: "Ana".into(),
            position: position.into(),
            bio: String::new(),
            image: "team/ana.jpg".into(),
            email: String::new(),
            phone: String::new(),
            experience_years: 3,
            specialization: String::new(),
            social_links: json!({}),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn team_member_gets_position_label_and_image_url() {
        let view = TeamMemberView::new(member("coordinator"), "/media/");
        assert_eq!(view.position_label, "Project Coordinator");
        assert_eq!(view.image_url.as_deref(), Some("/media/team/ana.jpg"));
    }

    #[test]
    fn unknown_position_falls_back_to_raw_key() {
        let view = TeamMemberView::new(member("intern"), "/media/");
        assert_eq!(view.position_label, "intern");
    }

    #[test]
    fn service_view_flattens_and_splits_features() {
        let service = Service {
            id: 1,
            name: "Lighting".into(),
            slug: "lighting".into(),
            description: "Light".into(),
            icon: String::new(),
            image: String::new(),
            features: "Ambient, Task ,Accent".into(),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(ServiceView::new(service, "/media/")).unwrap();
        assert_eq!(json["slug"], "lighting");
        assert_eq!(json["feature_list"], json!(["Ambient", "Task", "Accent"]));
        assert!(json["image_url"].is_null());
    }
}
