//! Listing limits and display helpers shared by the public pages and the
//! content-management API.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Listing limits
// ---------------------------------------------------------------------------

/// Featured projects on the home page.
pub const FEATURED_PROJECTS_LIMIT: i64 = 6;

/// Services on the home page (the services page lists all of them).
pub const HOME_SERVICES_LIMIT: i64 = 6;

/// Featured testimonials on the home page.
pub const FEATURED_TESTIMONIALS_LIMIT: i64 = 3;

/// Recent posts on the home page.
pub const HOME_RECENT_POSTS_LIMIT: i64 = 3;

/// Recent posts in the blog sidebar.
pub const SIDEBAR_RECENT_POSTS_LIMIT: i64 = 5;

/// Related projects on a project detail page.
pub const RELATED_PROJECTS_LIMIT: i64 = 3;

// ---------------------------------------------------------------------------
// Delimited text
// ---------------------------------------------------------------------------

/// Split a comma-delimited field (service features, post tags) into trimmed,
/// non-empty entries.
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Validate a testimonial rating (1 to 5 inclusive).
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Render a rating as filled and empty stars, e.g. `★★★★☆` for 4.
pub fn star_rating(rating: i16) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// Public URL for an uploaded file path, or `None` when no file is set.
///
/// Absolute URLs are passed through untouched; relative storage paths are
/// joined onto `media_base` with exactly one slash between them.
pub fn media_url(media_base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

// ---------------------------------------------------------------------------
// Team social links
// ---------------------------------------------------------------------------

/// Social links are stored as a JSON object of `network -> url` strings.
pub fn validate_social_links(value: &serde_json::Value) -> Result<(), CoreError> {
    let Some(map) = value.as_object() else {
        return Err(CoreError::Validation(
            "social_links must be a JSON object".into(),
        ));
    };
    if let Some((key, _)) = map.iter().find(|(_, v)| !v.is_string()) {
        return Err(CoreError::Validation(format!(
            "social_links.{key} must be a string URL"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_delimited_trims_and_skips_blanks() {
        assert_eq!(
            split_delimited(" Space planning, ,Lighting design ,"),
            vec!["Space planning".to_string(), "Lighting design".to_string()]
        );
        assert!(split_delimited("").is_empty());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn star_rating_renders_five_slots() {
        assert_eq!(star_rating(4), "★★★★☆");
        assert_eq!(star_rating(5), "★★★★★");
        assert_eq!(star_rating(9), "★★★★★");
    }

    #[test]
    fn media_url_joins_relative_paths() {
        assert_eq!(
            media_url("/media/", "projects/loft.jpg").as_deref(),
            Some("/media/projects/loft.jpg")
        );
        assert_eq!(
            media_url("https://cdn.example.com/media", "/team/ana.png").as_deref(),
            Some("https://cdn.example.com/media/team/ana.png")
        );
    }

    #[test]
    fn media_url_handles_empty_and_absolute() {
        assert_eq!(media_url("/media/", "  "), None);
        assert_eq!(
            media_url("/media/", "https://img.example.com/a.jpg").as_deref(),
            Some("https://img.example.com/a.jpg")
        );
    }

    #[test]
    fn social_links_must_be_object_of_strings() {
        assert!(validate_social_links(&serde_json::json!({})).is_ok());
        assert!(validate_social_links(
            &serde_json::json!({"linkedin": "https://linkedin.com/in/ana"})
        )
        .is_ok());
        assert!(validate_social_links(&serde_json::json!(["x"])).is_err());
        assert!(validate_social_links(&serde_json::json!({"x": 3})).is_err());
    }
}
