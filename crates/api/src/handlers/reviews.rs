//! Handler for review submission.
//!
//! Reviews are validated and acknowledged but not stored: the catalog is
//! read-only and there is no moderation queue behind this endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courseinsight_core::review::{Review, ReviewDraft};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews
///
/// Validate a review draft for an existing course and echo the review it
/// would create with `202 Accepted`.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ReviewDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let Json(draft) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if let Err(err) = draft.validate_draft() {
        tracing::debug!(course_id = %draft.course_id, error = %err, "Rejected review draft");
        return Err(err.into());
    }
    state.catalog.require_course(&draft.course_id)?;

    let review = draft.into_review(
        Uuid::new_v4().to_string(),
        chrono::Utc::now().date_naive(),
    )?;

    tracing::info!(
        review_id = %review.id,
        course_id = %review.course_id,
        anonymous = review.is_anonymous,
        overall_rating = review.overall_rating,
        "Review accepted (not persisted)"
    );

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: review })))
}
