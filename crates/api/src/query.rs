//! Shared query parameter types for API handlers.

use courseinsight_core::filter::RawSearchFilters;
use serde::Deserialize;

/// Course listing parameters
/// (`?q=&branch=&semester=&type=&difficulty=&min_rating=&limit=`).
///
/// Filter values arrive exactly as the UI controls send them, `"all"`
/// included; they are normalized once via [`RawSearchFilters`].
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    pub q: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    #[serde(rename = "type")]
    pub course_type: Option<String>,
    pub difficulty: Option<String>,
    #[serde(alias = "minRating")]
    pub min_rating: Option<String>,
    pub limit: Option<usize>,
}

impl CourseListParams {
    pub fn raw_filters(&self) -> RawSearchFilters {
        RawSearchFilters {
            branch: self.branch.clone(),
            semester: self.semester.clone(),
            course_type: self.course_type.clone(),
            difficulty: self.difficulty.clone(),
            min_rating: self.min_rating.clone(),
        }
    }

    pub fn search_text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// Free-text search parameter (`?q=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextParams {
    pub q: Option<String>,
}
