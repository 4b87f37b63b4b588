//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Course routes mounted at `/courses`.
///
/// ```text
/// GET /                 -> list
/// GET /featured         -> featured
/// GET /{id}             -> get_by_id
/// GET /{id}/reviews     -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list))
        .route("/featured", get(courses::featured))
        .route("/{id}", get(courses::get_by_id))
        .route("/{id}/reviews", get(courses::list_reviews))
}
