//! Client testimonial model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub client_position: String,
    pub client_company: String,
    pub content: String,
    /// 1 to 5.
    pub rating: i16,
    pub client_image: String,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial. `rating` defaults to 5.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub client_name: String,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub content: String,
    pub rating: Option<i16>,
    pub client_image: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub client_name: Option<String>,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub client_image: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}
