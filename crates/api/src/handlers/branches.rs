//! Handlers for the `/branches` resource.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use courseinsight_core::query::branch_summaries;
use courseinsight_core::search::BRANCH_PREVIEW_LIMIT;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/branches
pub async fn list(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: &state.catalog.branches,
    })
    .into_response()
}

/// GET /api/v1/branches/summary
///
/// Each branch with its course count and first few courses.
pub async fn summary(State(state): State<AppState>) -> Response {
    let catalog = &state.catalog;
    let summaries = branch_summaries(&catalog.courses, &catalog.branches, BRANCH_PREVIEW_LIMIT);
    Json(DataResponse { data: summaries }).into_response()
}
