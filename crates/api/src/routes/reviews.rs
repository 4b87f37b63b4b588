use axum::routing::post;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes mounted at `/reviews`.
///
/// ```text
/// POST /                -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reviews::submit))
}
