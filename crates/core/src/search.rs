//! Search text normalization and result-size constants.
//!
//! This module lives in `core` so the HTTP layer and any future tooling
//! agree on how free text is compared and how many results to return.

// ---------------------------------------------------------------------------
// Result limits
// ---------------------------------------------------------------------------

/// Default number of courses returned by a listing.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Maximum number of courses returned by a listing.
pub const MAX_RESULT_LIMIT: usize = 200;

/// Courses shown on the landing page (search results or featured).
pub const HOME_PREVIEW_LIMIT: usize = 6;

/// Courses offered by the review form's course picker.
pub const REVIEW_PICKER_LIMIT: usize = 10;

/// Courses previewed per branch in branch summaries.
pub const BRANCH_PREVIEW_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Lower-case free search text for case-insensitive substring matching.
///
/// Returns `None` for empty input, meaning "no text constraint". Whitespace
/// is kept as typed: `" "` only matches fields containing a space.
///
/// # Examples
///
/// ```
/// use courseinsight_core::search::normalize_search_text;
/// assert_eq!(normalize_search_text("DATA"), Some("data".to_string()));
/// assert_eq!(normalize_search_text(""), None);
/// ```
pub fn normalize_search_text(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

/// Case-insensitive substring test against an already lower-cased needle.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

/// Clamp a user-provided limit to `[1, max]`.
pub fn clamp_limit(limit: Option<usize>, default: usize, max: usize) -> usize {
    limit.unwrap_or(default).clamp(1, max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_search_text -----------------------------------------------

    #[test]
    fn normalize_lowercases_input() {
        assert_eq!(
            normalize_search_text("Data STRUCTURES"),
            Some("data structures".to_string())
        );
    }

    #[test]
    fn normalize_empty_returns_none() {
        assert_eq!(normalize_search_text(""), None);
    }

    #[test]
    fn normalize_keeps_whitespace() {
        assert_eq!(normalize_search_text("  "), Some("  ".to_string()));
    }

    // -- contains_folded -----------------------------------------------------

    #[test]
    fn contains_folded_ignores_haystack_case() {
        assert!(contains_folded("Data Structures", "data"));
        assert!(contains_folded("CS201", "cs2"));
        assert!(!contains_folded("Marketing 101", "data"));
    }

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default() {
        assert_eq!(clamp_limit(None, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT), 50);
    }

    #[test]
    fn clamp_limit_caps_at_max() {
        assert_eq!(clamp_limit(Some(1_000), 50, 200), 200);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 50, 200), 1);
    }
}
