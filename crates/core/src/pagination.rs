//! Page-number pagination for public listings.
//!
//! Listings are addressed with a 1-based `?page=N` query parameter. The first
//! page of an empty listing is valid; any other page outside `1..=num_pages`
//! is reported as not found so the caller can render a 404.

use serde::Serialize;

use crate::error::CoreError;

/// Projects shown per page on the project listing.
pub const PROJECTS_PER_PAGE: i64 = 12;

/// Blog posts shown per page on the blog listing.
pub const BLOG_POSTS_PER_PAGE: i64 = 9;

/// Parse the raw `page` query value. Absent or blank means page 1.
pub fn parse_page_number(raw: Option<&str>) -> Result<i64, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(1);
    };
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CoreError::not_found("Page", raw)),
    }
}

/// Position of one page within a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub num_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Resolve `number` against a listing of `total_count` rows.
    pub fn new(number: i64, per_page: i64, total_count: i64) -> Result<Self, CoreError> {
        let per_page = per_page.max(1);
        let total_count = total_count.max(0);
        let num_pages = ((total_count + per_page - 1) / per_page).max(1);

        if number < 1 || number > num_pages {
            return Err(CoreError::not_found("Page", number));
        }

        Ok(Self {
            number,
            per_page,
            total_count,
            num_pages,
            has_next: number < num_pages,
            has_previous: number > 1,
        })
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// One page of items plus its position in the listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T: Serialize> Page<T> {
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self { items, info }
    }

    /// Convert every item, keeping the page position.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
