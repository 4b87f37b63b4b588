//! CourseInsight domain core.
//!
//! Pure, synchronous logic shared by the HTTP service and tests: the
//! course/branch/review model, filter normalization, the course query
//! engine, review validation and the read-only fixture catalog.

pub mod catalog;
pub mod course;
pub mod error;
pub mod filter;
pub mod query;
pub mod rating_validation;
pub mod review;
pub mod search;
pub mod types;
