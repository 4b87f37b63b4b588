//! Route definitions for the `/branches` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::branches;
use crate::state::AppState;

/// Branch routes mounted at `/branches`.
///
/// ```text
/// GET /                 -> list
/// GET /summary          -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(branches::list))
        .route("/summary", get(branches::summary))
}
