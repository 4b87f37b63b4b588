//! Course query engine: free-text search, structured filtering and
//! catalog statistics.
//!
//! Everything here is a pure function over borrowed fixture records.
//! Filtering is stable (input order is kept) and never fails; see
//! [`crate::filter`] for how malformed selections are handled.

use std::collections::HashSet;

use serde::Serialize;

use crate::course::{Branch, Course};
use crate::filter::SearchFilters;
use crate::search::{contains_folded, normalize_search_text};

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether the lower-cased `needle` occurs in the course name, professor,
/// code or description, ignoring case.
pub fn matches_search(course: &Course, needle: &str) -> bool {
    [
        course.name.as_str(),
        course.professor.as_str(),
        course.code.as_str(),
        course.description.as_str(),
    ]
    .into_iter()
    .any(|field| contains_folded(field, needle))
}

/// Whether a course satisfies every constrained filter dimension.
pub fn matches_filters(course: &Course, filters: &SearchFilters) -> bool {
    if filters.is_unmatchable() {
        return false;
    }
    if filters.branch.as_ref().is_some_and(|b| course.branch != *b) {
        return false;
    }
    if filters.semester.is_some_and(|s| course.semester != s) {
        return false;
    }
    if filters.course_type.is_some_and(|t| course.course_type != t) {
        return false;
    }
    if filters.difficulty.is_some_and(|d| course.difficulty != d) {
        return false;
    }
    if filters.min_rating.is_some_and(|r| course.average_rating < r) {
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the courses matching `search_text` and `filters`, in input order.
///
/// Empty `search_text` imposes no text constraint. Accepts any iterator of
/// borrowed courses, so results can be filtered again.
pub fn filter_courses<'a, I>(
    courses: I,
    search_text: &str,
    filters: &SearchFilters,
) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    let needle = normalize_search_text(search_text);

    courses
        .into_iter()
        .filter(|course| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(course, needle))
        })
        .filter(|course| matches_filters(course, filters))
        .collect()
}

/// Courses belonging to `branch_id`, in input order.
pub fn courses_in_branch<'a, I>(courses: I, branch_id: &str) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter(|course| course.branch == branch_id)
        .collect()
}

/// Course picker search used by the review form.
///
/// Narrower than [`filter_courses`]: only name, code and professor are
/// matched, never the description.
pub fn search_review_candidates<'a, I>(courses: I, search_text: &str) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    let Some(needle) = normalize_search_text(search_text) else {
        return courses.into_iter().collect();
    };

    courses
        .into_iter()
        .filter(|course| {
            [
                course.name.as_str(),
                course.code.as_str(),
                course.professor.as_str(),
            ]
            .into_iter()
            .any(|field| contains_folded(field, &needle))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Aggregate numbers shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_courses: usize,
    pub total_reviews: u64,
    /// Mean of the courses' average ratings; `None` when there are no courses.
    pub average_rating: Option<f64>,
    /// Distinct branch ids referenced by the courses.
    pub branch_count: usize,
}

/// Compute [`CatalogStats`] over any collection of courses.
pub fn compute_stats<'a, I>(courses: I) -> CatalogStats
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut total_courses = 0usize;
    let mut total_reviews = 0u64;
    let mut rating_sum = 0.0f64;
    let mut branches: HashSet<&str> = HashSet::new();

    for course in courses {
        total_courses += 1;
        total_reviews += u64::from(course.total_reviews);
        rating_sum += course.average_rating;
        branches.insert(course.branch.as_str());
    }

    let average_rating = (total_courses > 0).then(|| rating_sum / total_courses as f64);

    CatalogStats {
        total_courses,
        total_reviews,
        average_rating,
        branch_count: branches.len(),
    }
}

// ---------------------------------------------------------------------------
// Branch summaries
// ---------------------------------------------------------------------------

/// A branch with its course count and the first few of its courses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary<'a> {
    pub branch: &'a Branch,
    pub course_count: usize,
    pub courses: Vec<&'a Course>,
}

/// Summarize each branch in `branches` order, previewing up to `preview`
/// courses per branch.
pub fn branch_summaries<'a>(
    courses: &'a [Course],
    branches: &'a [Branch],
    preview: usize,
) -> Vec<BranchSummary<'a>> {
    branches
        .iter()
        .map(|branch| {
            let mut in_branch = courses_in_branch(courses, &branch.id);
            let course_count = in_branch.len();
            in_branch.truncate(preview);
            BranchSummary {
                branch,
                course_count,
                courses: in_branch,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
