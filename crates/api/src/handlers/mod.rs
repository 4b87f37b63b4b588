//! Request handlers.
//!
//! Handlers read from the shared read-only [`Catalog`](courseinsight_core::catalog::Catalog),
//! delegate to `courseinsight_core` for querying and validation, and map
//! errors via [`AppError`](crate::error::AppError).

pub mod branches;
pub mod courses;
pub mod reviews;
pub mod stats;
