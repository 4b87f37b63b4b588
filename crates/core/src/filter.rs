//! Structured course filters.
//!
//! Filter controls hand over strings where `"all"` stands for "no
//! constraint". [`RawSearchFilters::normalize`] converts them once into a
//! typed [`SearchFilters`], so the query engine only ever sees `Option`s.
//! A value that cannot be parsed is recorded as malformed and makes the
//! filter match nothing instead of raising an error.
//!
//! The sentinel is case-sensitive, like every other filter value: `"ALL"`
//! is not `"all"` and is recorded as malformed.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::course::{CourseType, Difficulty};
use crate::types::EntityId;

/// Sentinel selection meaning "every value of this dimension".
pub const ALL_SENTINEL: &str = "all";

/// Lowest semester number.
pub const MIN_SEMESTER: u8 = 1;

/// Highest semester number.
pub const MAX_SEMESTER: u8 = 8;

// ---------------------------------------------------------------------------
// FilterValue
// ---------------------------------------------------------------------------

/// One filter dimension as selected at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue<T> {
    /// Absent, empty or `"all"`.
    Any,
    /// Constrain to exactly this value.
    Only(T),
    /// The raw selection did not parse; matches nothing.
    Malformed(String),
}

impl<T: FromStr> FilterValue<T> {
    /// Parse a raw selection. Surrounding whitespace is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Any,
            Some(ALL_SENTINEL) => Self::Any,
            Some(value) => value
                .parse()
                .map(Self::Only)
                .unwrap_or_else(|_| Self::Malformed(value.to_string())),
        }
    }
}

impl<T: Display> FilterValue<T> {
    /// Demote a parsed value to `Malformed` when it fails `accept`.
    pub fn ensure(self, accept: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Only(value) if !accept(&value) => Self::Malformed(value.to_string()),
            other => other,
        }
    }
}

impl<T> FilterValue<T> {
    /// Fold into an `Option`, recording `name` if the value was malformed.
    fn settle(self, name: &'static str, malformed: &mut Vec<&'static str>) -> Option<T> {
        match self {
            Self::Any => None,
            Self::Only(value) => Some(value),
            Self::Malformed(_) => {
                malformed.push(name);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SearchFilters
// ---------------------------------------------------------------------------

/// Typed filter set. `None` on a dimension means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub course_type: Option<CourseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Dimensions whose raw selection did not parse.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub malformed: Vec<&'static str>,
}

impl SearchFilters {
    /// Number of constrained dimensions, malformed ones included.
    pub fn active_count(&self) -> usize {
        [
            self.branch.is_some(),
            self.semester.is_some(),
            self.course_type.is_some(),
            self.difficulty.is_some(),
            self.min_rating.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
            + self.malformed.len()
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// True when some selection was malformed, so no course can match.
    pub fn is_unmatchable(&self) -> bool {
        !self.malformed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RawSearchFilters
// ---------------------------------------------------------------------------

/// Filter selections exactly as the UI controls produce them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchFilters {
    pub branch: Option<String>,
    pub semester: Option<String>,
    #[serde(rename = "type")]
    pub course_type: Option<String>,
    pub difficulty: Option<String>,
    pub min_rating: Option<String>,
}

impl RawSearchFilters {
    /// Convert the raw selections into a typed filter set.
    ///
    /// Semesters outside `1..=8` and non-finite ratings count as malformed.
    pub fn normalize(&self) -> SearchFilters {
        let mut malformed = Vec::new();

        let branch = FilterValue::<EntityId>::parse(self.branch.as_deref())
            .settle("branch", &mut malformed);
        let semester = FilterValue::<u8>::parse(self.semester.as_deref())
            .ensure(|s| (MIN_SEMESTER..=MAX_SEMESTER).contains(s))
            .settle("semester", &mut malformed);
        let course_type = FilterValue::<CourseType>::parse(self.course_type.as_deref())
            .settle("type", &mut malformed);
        let difficulty = FilterValue::<Difficulty>::parse(self.difficulty.as_deref())
            .settle("difficulty", &mut malformed);
        let min_rating = FilterValue::<f64>::parse(self.min_rating.as_deref())
            .ensure(|r| r.is_finite())
            .settle("minRating", &mut malformed);

        SearchFilters {
            branch,
            semester,
            course_type,
            difficulty,
            min_rating,
            malformed,
        }
    }
}
