//! Course and branch records plus their enum attributes.
//!
//! Records are immutable fixtures: loaded once from the catalog and only
//! ever borrowed afterwards. Wire names are camelCase to match the
//! browser client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Enum attributes
// ---------------------------------------------------------------------------

/// Returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Whether a course is mandatory for its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Core,
    Elective,
}

impl CourseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Elective => "elective",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "elective" => Ok(Self::Elective),
            other => Err(ParseEnumError {
                kind: "course type",
                value: other.to_string(),
            }),
        }
    }
}

/// Perceived workload of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Map a 1-5 difficulty rating to a level: 1-2 easy, 3 moderate, 4-5 hard.
    pub fn from_rating(rating: u8) -> Self {
        if rating <= 2 {
            Self::Easy
        } else if rating <= 3 {
            Self::Moderate
        } else {
            Self::Hard
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            other => Err(ParseEnumError {
                kind: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// An academic department or programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: EntityId,
    pub name: String,
    pub code: String,
}

/// A course with its metadata and aggregate ratings.
///
/// `branch` is a foreign key into the branch set; it is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    pub description: String,
    pub professor: String,
    pub branch: EntityId,
    pub semester: u8,
    pub credits: u32,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub difficulty: Difficulty,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub facilities: f64,
    pub teaching: f64,
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Number of filled stars for a rating: the floor, clamped to `[0, 5]`.
pub fn filled_stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.floor().clamp(0.0, 5.0) as u8
}

/// Render a rating with one decimal place (`4.3`, `3.0`).
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}
