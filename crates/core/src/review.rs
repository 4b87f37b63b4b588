//! Student reviews and the review submission form.
//!
//! A [`ReviewDraft`] is the form state as the student fills it in. Ratings
//! start at `0` meaning "not chosen yet". A draft is submit-eligible when
//! a course is selected, all four ratings are in `[1, 5]`, the trimmed
//! feedback has at least ten characters, and the student is either
//! anonymous or gave a trimmed name of at least two characters.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::course::Difficulty;
use crate::error::CoreError;
use crate::rating_validation::validate_rating_range;
use crate::types::{EntityId, ReviewDate};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Minimum trimmed feedback length, in characters.
pub const MIN_FEEDBACK_LENGTH: usize = 10;

/// Minimum trimmed student name length for non-anonymous reviews.
pub const MIN_STUDENT_NAME_LENGTH: usize = 2;

/// Reviews shown alongside a course before "see all".
pub const RECENT_REVIEW_LIMIT: usize = 3;

/// Name shown in place of the student for anonymous reviews.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous Student";

/* --------------------------------------------------------------------------
Review
-------------------------------------------------------------------------- */

/// A submitted review of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: EntityId,
    pub course_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub is_anonymous: bool,
    pub overall_rating: u8,
    pub difficulty_rating: u8,
    pub facilities_rating: u8,
    pub teaching_rating: u8,
    pub feedback: String,
    pub date: ReviewDate,
    #[serde(default)]
    pub helpful: u32,
}

impl Review {
    /// Name to show next to the review. Anonymity wins over any stored name.
    pub fn display_name(&self) -> &str {
        match self.student_name.as_deref() {
            Some(name) if !self.is_anonymous && !name.trim().is_empty() => name,
            _ => ANONYMOUS_DISPLAY_NAME,
        }
    }

    /// Difficulty level implied by the student's difficulty rating.
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_rating(self.difficulty_rating)
    }

    /// Check all four ratings are whole stars in `[1, 5]`.
    pub fn validate_ratings(&self) -> Result<(), CoreError> {
        validate_rating_range(self.overall_rating, "overallRating")?;
        validate_rating_range(self.difficulty_rating, "difficultyRating")?;
        validate_rating_range(self.facilities_rating, "facilitiesRating")?;
        validate_rating_range(self.teaching_rating, "teachingRating")?;
        Ok(())
    }
}

/// Reviews of `course_id`, in fixture order.
pub fn reviews_for_course<'a>(reviews: &'a [Review], course_id: &str) -> Vec<&'a Review> {
    reviews.iter().filter(|r| r.course_id == course_id).collect()
}

/// The first [`RECENT_REVIEW_LIMIT`] reviews of `course_id`.
pub fn preview_reviews<'a>(reviews: &'a [Review], course_id: &str) -> Vec<&'a Review> {
    let mut found = reviews_for_course(reviews, course_id);
    found.truncate(RECENT_REVIEW_LIMIT);
    found
}

/* --------------------------------------------------------------------------
ReviewDraft
-------------------------------------------------------------------------- */

/// Review form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_reviewer_name", skip_on_field_errors = false))]
pub struct ReviewDraft {
    #[validate(length(min = 1, message = "a course must be selected"))]
    pub course_id: EntityId,
    pub student_name: String,
    pub is_anonymous: bool,
    #[validate(range(min = 1, max = 5, message = "overall rating must be between 1 and 5"))]
    pub overall_rating: u8,
    #[validate(range(min = 1, max = 5, message = "difficulty rating must be between 1 and 5"))]
    pub difficulty_rating: u8,
    #[validate(range(min = 1, max = 5, message = "facilities rating must be between 1 and 5"))]
    pub facilities_rating: u8,
    #[validate(range(min = 1, max = 5, message = "teaching rating must be between 1 and 5"))]
    pub teaching_rating: u8,
    #[validate(custom(function = "validate_feedback"))]
    pub feedback: String,
}

impl ReviewDraft {
    /// Validate the draft, collecting every failed rule into one message.
    pub fn validate_draft(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
    }

    /// Pure submit-eligibility predicate for the form's submit button.
    pub fn is_submit_eligible(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the review record a valid draft describes.
    ///
    /// Feedback and name are trimmed; the name is dropped for anonymous
    /// reviews. New reviews start with no helpful votes.
    pub fn into_review(self, id: EntityId, date: ReviewDate) -> Result<Review, CoreError> {
        self.validate_draft()?;

        let student_name = if self.is_anonymous {
            None
        } else {
            Some(self.student_name.trim().to_string())
        };

        Ok(Review {
            id,
            course_id: self.course_id,
            student_name,
            is_anonymous: self.is_anonymous,
            overall_rating: self.overall_rating,
            difficulty_rating: self.difficulty_rating,
            facilities_rating: self.facilities_rating,
            teaching_rating: self.teaching_rating,
            feedback: self.feedback.trim().to_string(),
            date,
            helpful: 0,
        })
    }
}

fn validation_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn validate_feedback(feedback: &str) -> Result<(), ValidationError> {
    if feedback.trim().chars().count() < MIN_FEEDBACK_LENGTH {
        return Err(validation_error(
            "feedback_too_short",
            format!("feedback must be at least {MIN_FEEDBACK_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn validate_reviewer_name(draft: &ReviewDraft) -> Result<(), ValidationError> {
    if !draft.is_anonymous && draft.student_name.trim().chars().count() < MIN_STUDENT_NAME_LENGTH
    {
        return Err(validation_error(
            "student_name_required",
            format!(
                "student name must be at least {MIN_STUDENT_NAME_LENGTH} characters unless posting anonymously"
            ),
        ));
    }
    Ok(())
}

/// Flatten validator output into a stable, human-readable message.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            course_id: "c1".to_string(),
            student_name: "Asha".to_string(),
            is_anonymous: false,
            overall_rating: 5,
            difficulty_rating: 5,
            facilities_rating: 5,
            teaching_rating: 5,
            feedback: "Great course overall".to_string(),
        }
    }

    fn date() -> ReviewDate {
        ReviewDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    // -- eligibility ---------------------------------------------------------

    #[test]
    fn valid_draft_is_eligible() {
        assert!(valid_draft().is_submit_eligible());
        assert!(valid_draft().validate_draft().is_ok());
    }

    #[test]
    fn empty_name_without_anonymity_is_invalid() {
        let draft = ReviewDraft {
            student_name: String::new(),
            ..valid_draft()
        };
        assert!(!draft.is_submit_eligible());
        assert_matches!(
            draft.validate_draft(),
            Err(CoreError::Validation(msg)) if msg.contains("student name")
        );
    }

    #[test]
    fn anonymity_makes_empty_name_valid() {
        let draft = ReviewDraft {
            student_name: String::new(),
            is_anonymous: true,
            ..valid_draft()
        };
        assert!(draft.is_submit_eligible());
    }

    #[test]
    fn name_is_trimmed_before_length_check() {
        let draft = ReviewDraft {
            student_name: "  A  ".to_string(),
            ..valid_draft()
        };
        assert!(!draft.is_submit_eligible());

        let draft = ReviewDraft {
            student_name: " Al ".to_string(),
            ..valid_draft()
        };
        assert!(draft.is_submit_eligible());
    }

    #[test]
    fn missing_course_is_invalid() {
        let draft = ReviewDraft {
            course_id: String::new(),
            ..valid_draft()
        };
        assert_matches!(
            draft.validate_draft(),
            Err(CoreError::Validation(msg)) if msg.contains("a course must be selected")
        );
    }

    #[test]
    fn unset_rating_is_invalid() {
        let draft = ReviewDraft {
            facilities_rating: 0,
            ..valid_draft()
        };
        assert_matches!(
            draft.validate_draft(),
            Err(CoreError::Validation(msg)) if msg.contains("facilities rating")
        );
    }

    #[test]
    fn rating_above_five_is_invalid() {
        let draft = ReviewDraft {
            overall_rating: 6,
            ..valid_draft()
        };
        assert!(!draft.is_submit_eligible());
    }

    #[test]
    fn short_feedback_is_invalid_after_trim() {
        let draft = ReviewDraft {
            feedback: "   too short   ".to_string(),
            ..valid_draft()
        };
        assert!(!draft.is_submit_eligible());
    }

    #[test]
    fn feedback_of_exactly_ten_characters_is_valid() {
        let draft = ReviewDraft {
            feedback: "0123456789".to_string(),
            ..valid_draft()
        };
        assert!(draft.is_submit_eligible());

        let draft = ReviewDraft {
            feedback: " 012345678 ".to_string(),
            ..valid_draft()
        };
        assert!(!draft.is_submit_eligible());
    }

    #[test]
    fn default_draft_reports_every_problem() {
        let err = ReviewDraft::default().validate_draft().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a course must be selected"));
        assert!(msg.contains("overall rating"));
        assert!(msg.contains("teaching rating"));
        assert!(msg.contains("feedback must be at least 10 characters"));
        assert!(msg.contains("student name"));
    }

    // -- into_review ---------------------------------------------------------

    #[test]
    fn into_review_trims_and_starts_unvoted() {
        let draft = ReviewDraft {
            student_name: "  Asha ".to_string(),
            feedback: "  Great course overall \n".to_string(),
            ..valid_draft()
        };
        let review = draft.into_review("r9".to_string(), date()).unwrap();
        assert_eq!(review.student_name.as_deref(), Some("Asha"));
        assert_eq!(review.feedback, "Great course overall");
        assert_eq!(review.helpful, 0);
        assert_eq!(review.date, date());
    }

    #[test]
    fn into_review_drops_name_when_anonymous() {
        let draft = ReviewDraft {
            is_anonymous: true,
            ..valid_draft()
        };
        let review = draft.into_review("r9".to_string(), date()).unwrap();
        assert_eq!(review.student_name, None);
        assert_eq!(review.display_name(), ANONYMOUS_DISPLAY_NAME);
    }

    #[test]
    fn into_review_rejects_invalid_draft() {
        let result = ReviewDraft::default().into_review("r9".to_string(), date());
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    // -- Review --------------------------------------------------------------

    #[test]
    fn display_name_suppressed_when_anonymous_even_with_name() {
        let mut review = valid_draft().into_review("r1".to_string(), date()).unwrap();
        assert_eq!(review.display_name(), "Asha");
        review.is_anonymous = true;
        assert_eq!(review.display_name(), ANONYMOUS_DISPLAY_NAME);
    }

    #[test]
    fn review_deserializes_iso_date() {
        let review: Review = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "courseId": "c1",
            "studentName": "Ravi",
            "isAnonymous": false,
            "overallRating": 4,
            "difficultyRating": 2,
            "facilitiesRating": 3,
            "teachingRating": 5,
            "feedback": "Clear lectures and fair exams",
            "date": "2024-01-15",
            "helpful": 12
        }))
        .unwrap();
        assert_eq!(review.date, ReviewDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(review.difficulty_level(), Difficulty::Easy);
        assert!(review.validate_ratings().is_ok());
    }

    #[test]
    fn validate_ratings_names_bad_field() {
        let mut review = valid_draft().into_review("r1".to_string(), date()).unwrap();
        review.teaching_rating = 0;
        assert_matches!(
            review.validate_ratings(),
            Err(CoreError::Validation(msg)) if msg.contains("teachingRating")
        );
    }

    #[test]
    fn preview_reviews_limits_to_three_in_order() {
        let base = valid_draft().into_review("r0".to_string(), date()).unwrap();
        let reviews: Vec<Review> = (0..5)
            .map(|n| Review {
                id: format!("r{n}"),
                course_id: if n == 1 { "c2".to_string() } else { "c1".to_string() },
                ..base.clone()
            })
            .collect();

        let all: Vec<&str> = reviews_for_course(&reviews, "c1")
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(all, vec!["r0", "r2", "r3", "r4"]);

        let preview: Vec<&str> = preview_reviews(&reviews, "c1")
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(preview, vec!["r0", "r2", "r3"]);
    }
}
