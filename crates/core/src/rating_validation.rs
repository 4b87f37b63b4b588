//! Shared rating range checks.
//!
//! Student-entered ratings are whole stars in `[1, 5]`; aggregate scores
//! stored on course records are reals in `[0.0, 5.0]`.

use crate::error::CoreError;

/// Lowest star a student can give.
pub const MIN_RATING: u8 = 1;

/// Highest star a student can give.
pub const MAX_RATING: u8 = 5;

/// Upper bound for aggregate course scores.
pub const MAX_SCORE: f64 = 5.0;

/// Validate that a student rating falls within `[MIN_RATING, MAX_RATING]`.
///
/// Returns a `CoreError::Validation` naming the field if out of range.
pub fn validate_rating_range(value: u8, name: &str) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {MIN_RATING} and {MAX_RATING}, got {value}"
        )));
    }
    Ok(())
}

/// Validate that an aggregate score falls within `[0.0, MAX_SCORE]`.
///
/// NaN is rejected.
pub fn validate_score_range(value: f64, name: &str) -> Result<(), CoreError> {
    if !(0.0..=MAX_SCORE).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0.0 and {MAX_SCORE}, got {value}"
        )));
    }
    Ok(())
}
