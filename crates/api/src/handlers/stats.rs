//! Handler for catalog-wide statistics.

use axum::extract::State;
use axum::Json;
use courseinsight_core::query::{compute_stats, CatalogStats};

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// `averageRating` is `null` when the catalog has no courses.
pub async fn get_stats(State(state): State<AppState>) -> Json<DataResponse<CatalogStats>> {
    Json(DataResponse {
        data: compute_stats(&state.catalog.courses),
    })
}
