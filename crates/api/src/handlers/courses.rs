//! Handlers for the `/courses` resource and the review-form course picker.
//!
//! Payloads borrow straight from the shared catalog, so each handler
//! serializes its response before returning.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use courseinsight_core::course::{filled_stars, format_rating, Branch, Course, Difficulty};
use courseinsight_core::filter::SearchFilters;
use courseinsight_core::query::{filter_courses, search_review_candidates};
use courseinsight_core::review::{preview_reviews, reviews_for_course, Review};
use courseinsight_core::search::{
    clamp_limit, DEFAULT_RESULT_LIMIT, HOME_PREVIEW_LIMIT, MAX_RESULT_LIMIT, REVIEW_PICKER_LIMIT,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{CourseListParams, SearchTextParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Filtered course listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseList<'a> {
    /// Number of matching courses before `limit` is applied.
    pub total: usize,
    /// Normalized filters that were applied.
    pub filters: SearchFilters,
    /// Constrained filter dimensions, for the filter badge.
    pub active_filters: usize,
    pub courses: Vec<&'a Course>,
}

/// A review as shown to readers: the record plus its display name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView<'a> {
    #[serde(flatten)]
    pub review: &'a Review,
    pub display_name: &'a str,
    pub difficulty_level: Difficulty,
}

impl<'a> From<&'a Review> for ReviewView<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            review,
            display_name: review.display_name(),
            difficulty_level: review.difficulty_level(),
        }
    }
}

/// Course details payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail<'a> {
    pub course: &'a Course,
    /// Whole stars to fill for the course's average rating.
    pub filled_stars: u8,
    /// Average rating with one decimal place.
    pub formatted_rating: String,
    /// `None` when the course references an unknown branch.
    pub branch: Option<&'a Branch>,
    pub review_count: usize,
    pub recent_reviews: Vec<ReviewView<'a>>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/courses?q=&branch=&semester=&type=&difficulty=&min_rating=&limit=
///
/// Search and filter the catalog. Results keep catalog order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> Response {
    let filters = params.raw_filters().normalize();
    if filters.is_unmatchable() {
        tracing::debug!(malformed = ?filters.malformed, "Malformed course filter, nothing can match");
    }

    let mut courses = filter_courses(&state.catalog.courses, params.search_text(), &filters);
    let total = courses.len();
    let active_filters = filters.active_count();
    courses.truncate(clamp_limit(
        params.limit,
        DEFAULT_RESULT_LIMIT,
        MAX_RESULT_LIMIT,
    ));
    tracing::debug!(
        total,
        returned = courses.len(),
        filtered = !filters.is_empty(),
        "Course search"
    );

    Json(DataResponse {
        data: CourseList {
            total,
            filters,
            active_filters,
            courses,
        },
    })
    .into_response()
}

/// GET /api/v1/courses/featured
///
/// Featured courses for the landing page.
pub async fn featured(State(state): State<AppState>) -> Response {
    let mut courses = state.catalog.featured_courses();
    courses.truncate(HOME_PREVIEW_LIMIT);
    Json(DataResponse { data: courses }).into_response()
}

/// GET /api/v1/courses/{id}
///
/// Course with its branch and the first few reviews.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let catalog = &state.catalog;
    let course = catalog.require_course(&id)?;

    let detail = CourseDetail {
        course,
        filled_stars: filled_stars(course.average_rating),
        formatted_rating: format_rating(course.average_rating),
        branch: catalog.branch(&course.branch),
        review_count: reviews_for_course(&catalog.reviews, &course.id).len(),
        recent_reviews: preview_reviews(&catalog.reviews, &course.id)
            .into_iter()
            .map(ReviewView::from)
            .collect(),
    };
    Ok(Json(DataResponse { data: detail }).into_response())
}

/// GET /api/v1/courses/{id}/reviews
///
/// Every review of a course, in catalog order.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let catalog = &state.catalog;
    let course = catalog.require_course(&id)?;

    let reviews: Vec<ReviewView<'_>> = reviews_for_course(&catalog.reviews, &course.id)
        .into_iter()
        .map(ReviewView::from)
        .collect();
    Ok(Json(DataResponse { data: reviews }).into_response())
}

/// GET /api/v1/review-candidates?q=
///
/// Course picker for the review form; matches name, code and professor.
/// At most [`REVIEW_PICKER_LIMIT`] courses are offered.
pub async fn review_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchTextParams>,
) -> Response {
    let mut courses = search_review_candidates(
        &state.catalog.courses,
        params.q.as_deref().unwrap_or_default(),
    );
    courses.truncate(REVIEW_PICKER_LIMIT);
    Json(DataResponse { data: courses }).into_response()
}
