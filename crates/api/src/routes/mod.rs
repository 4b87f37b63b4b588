pub mod branches;
pub mod courses;
pub mod health;
pub mod reviews;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses                                         search + filter (GET)
/// /courses/featured                                featured courses (GET)
/// /courses/{id}                                    course details (GET)
/// /courses/{id}/reviews                            all reviews of a course (GET)
///
/// /branches                                        list branches (GET)
/// /branches/summary                                per-branch course preview (GET)
///
/// /stats                                           catalog statistics (GET)
///
/// /review-candidates                               review-form course picker (GET)
/// /reviews                                         submit a review (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/courses", courses::router())
        .nest("/branches", branches::router())
        .route("/stats", get(handlers::stats::get_stats))
        .route(
            "/review-candidates",
            get(handlers::courses::review_candidates),
        )
        .nest("/reviews", reviews::router())
}
