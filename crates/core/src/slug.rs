//! Slug derivation and validation.
//!
//! Category, project, service and blog post slugs are derived from their
//! human-readable name when the editor does not supply one. The repository
//! layer owns uniqueness; this module only produces candidates.

use crate::error::CoreError;

/// Maximum slug length, matching the `VARCHAR(50)` slug columns.
pub const MAX_SLUG_LEN: usize = 50;

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Normalize human-readable text into a URL-safe slug.
///
/// Lowercases, folds accented Latin letters to their base letter, drops
/// anything that is not alphanumeric, `_`, whitespace or `-`, collapses runs
/// of whitespace and hyphens into a single hyphen, and trims leading and
/// trailing hyphens and underscores. The result is capped at
/// [`MAX_SLUG_LEN`] characters.
///
/// ```
/// use portfolio_core::slug::slugify;
/// assert_eq!(slugify("Modern Loft, Downtown!"), "modern-loft-downtown");
/// assert_eq!(slugify("Café Renovation"), "cafe-renovation");
/// ```
pub fn slugify(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            kept.push(c);
        } else if c.is_whitespace() {
            kept.push(' ');
        } else if let Some(base) = fold_accent(c) {
            kept.push(base);
        }
    }

    let mut result = String::with_capacity(kept.len());
    let mut in_separator = false;
    for c in kept.chars() {
        if c == ' ' || c == '-' {
            in_separator = true;
            continue;
        }
        if in_separator && !result.is_empty() {
            result.push('-');
        }
        in_separator = false;
        result.push(c);
    }

    truncate(result.trim_matches(|c| c == '-' || c == '_'), MAX_SLUG_LEN)
}

/// Derive a slug from `source`, falling back to `fallback` when the source
/// normalizes to an empty string (e.g. a title made only of punctuation).
pub fn derive_slug(source: &str, fallback: &str) -> String {
    let slug = slugify(source);
    if slug.is_empty() {
        slugify(fallback)
    } else {
        slug
    }
}

/// The `n`-th disambiguated candidate for `base` (`n >= 2`), e.g.
/// `kitchen-remodel-3`. The base is shortened so the result still fits in
/// [`MAX_SLUG_LEN`].
pub fn with_suffix(base: &str, n: u32) -> String {
    let suffix = format!("-{n}");
    let room = MAX_SLUG_LEN.saturating_sub(suffix.len());
    let head = truncate(base, room);
    format!("{}{suffix}", head.trim_end_matches('-'))
}

fn truncate(slug: &str, max: usize) -> String {
    if slug.len() <= max {
        return slug.to_string();
    }
    // Slugs are pure ASCII at this point, so byte slicing is safe.
    slug[..max].trim_end_matches(['-', '_']).to_string()
}

/// Map a lowercase accented Latin letter to its unaccented base letter.
fn fold_accent(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an editor-supplied slug: non-empty, at most [`MAX_SLUG_LEN`]
/// characters, only lowercase ASCII letters, digits, `-` and `_`.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase letters, digits, hyphens and underscores".into(),
        ));
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
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Kitchen Remodel"), "kitchen-remodel");
    }

    #[test]
    fn slugify_drops_punctuation_without_splitting_words() {
        assert_eq!(slugify("Don't Panic: A Guide"), "dont-panic-a-guide");
    }

    #[test]
    fn slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Living -- Room   Ideas "), "living-room-ideas");
    }

    #[test]
    fn slugify_keeps_inner_underscores_and_trims_outer_ones() {
        assert_eq!(slugify("_snake_case title_"), "snake_case-title");
    }

    #[test]
    fn slugify_folds_accents_and_drops_other_scripts() {
        assert_eq!(slugify("Crème Brûlée Café"), "creme-brulee-cafe");
        assert_eq!(slugify("東京 Loft"), "loft");
    }

    #[test]
    fn slugify_caps_length() {
        let long = "word ".repeat(30);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn derive_slug_uses_fallback_for_empty_result() {
        assert_eq!(derive_slug("!!!", "project"), "project");
        assert_eq!(derive_slug("Open Plan", "project"), "open-plan");
    }

    #[test]
    fn with_suffix_appends_counter() {
        assert_eq!(with_suffix("kitchen-remodel", 2), "kitchen-remodel-2");
    }

    #[test]
    fn with_suffix_keeps_result_within_limit() {
        let base = "a".repeat(MAX_SLUG_LEN);
        let candidate = with_suffix(&base, 12);
        assert_eq!(candidate.len(), MAX_SLUG_LEN);
        assert!(candidate.ends_with("-12"));
    }

    #[test]
    fn validate_slug_accepts_derived_slugs() {
        assert!(validate_slug(&slugify("Modern Loft 2024")).is_ok());
    }

    #[test]
    fn validate_slug_rejects_bad_input() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("UPPER").is_err());
        assert!(validate_slug(&"x".repeat(MAX_SLUG_LEN + 1)).is_err());
    }
}
