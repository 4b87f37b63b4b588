//! Read-only course catalog fixture.
//!
//! The catalog stands in for a backend: branches, courses, reviews and the
//! ids of featured courses, loaded once from JSON and never mutated.
//! `course.branch` is a loose reference; a branch lookup for an unknown id
//! simply returns `None`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::course::{Branch, Course};
use crate::error::CoreError;
use crate::filter::{MAX_SEMESTER, MIN_SEMESTER};
use crate::rating_validation::validate_score_range;
use crate::review::Review;
use crate::types::EntityId;

/// The full fixture dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Course ids to highlight on the landing page, in display order.
    #[serde(default)]
    pub featured: Vec<EntityId>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Fixture(format!("invalid catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Fixture(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Sanity-check the fixture.
    ///
    /// Ids must be unique per entity, semesters in `1..=8`, credits positive,
    /// aggregate scores in `[0, 5]` and review ratings in `[1, 5]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure_unique("branch", self.branches.iter().map(|b| b.id.as_str()))?;
        ensure_unique("course", self.courses.iter().map(|c| c.id.as_str()))?;
        ensure_unique("review", self.reviews.iter().map(|r| r.id.as_str()))?;

        for course in &self.courses {
            if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&course.semester) {
                return Err(CoreError::Fixture(format!(
                    "course {}: semester must be between {MIN_SEMESTER} and {MAX_SEMESTER}, got {}",
                    course.id, course.semester
                )));
            }
            if course.credits == 0 {
                return Err(CoreError::Fixture(format!(
                    "course {}: credits must be positive",
                    course.id
                )));
            }
            for (value, name) in [
                (course.average_rating, "averageRating"),
                (course.facilities, "facilities"),
                (course.teaching, "teaching"),
            ] {
                validate_score_range(value, name)
                    .map_err(|e| CoreError::Fixture(format!("course {}: {e}", course.id)))?;
            }
        }

        for review in &self.reviews {
            review
                .validate_ratings()
                .map_err(|e| CoreError::Fixture(format!("review {}: {e}", review.id)))?;
        }

        Ok(())
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Like [`Catalog::course`] but a missing course is a `NotFound` error.
    pub fn require_course(&self, id: &str) -> Result<&Course, CoreError> {
        self.course(id).ok_or_else(|| CoreError::NotFound {
            entity: "Course",
            id: id.to_string(),
        })
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// Featured courses in `featured` order. Unknown ids are skipped.
    pub fn featured_courses(&self) -> Vec<&Course> {
        self.featured.iter().filter_map(|id| self.course(id)).collect()
    }
}

fn ensure_unique<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Fixture(format!("duplicate {entity} id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use assert_matches::assert_matches;

    const CATALOG_JSON: &str = r#"{
        "branches": [
            { "id": "cse", "name": "Computer Science and Engineering", "code": "CSE" },
            { "id": "mba", "name": "Business Administration", "code": "MBA" }
        ],
        "courses": [
            {
                "id": "c1", "name": "Data Structures", "code": "CS201",
                "description": "Trees, heaps and graphs", "professor": "Dr. Rao",
                "branch": "cse", "semester": 3, "credits": 4, "type": "core",
                "difficulty": "hard", "averageRating": 4.2, "totalReviews": 120,
                "facilities": 4.0, "teaching": 4.5
            },
            {
                "id": "c2", "name": "Marketing 101", "code": "BM101",
                "description": "Principles of marketing", "professor": "Dr. Lee",
                "branch": "mba", "semester": 1, "credits": 3, "type": "elective",
                "difficulty": "easy", "averageRating": 3.1, "totalReviews": 45,
                "facilities": 3.5, "teaching": 3.0
            }
        ],
        "reviews": [
            {
                "id": "r1", "courseId": "c1", "studentName": "Ravi",
                "isAnonymous": false, "overallRating": 4, "difficultyRating": 5,
                "facilitiesRating": 4, "teachingRating": 5,
                "feedback": "Tough but rewarding", "date": "2024-01-15", "helpful": 12
            }
        ],
        "featured": ["c2", "missing", "c1"]
    }"#;

    #[test]
    fn parses_valid_catalog() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.branches.len(), 2);
        assert_eq!(catalog.courses.len(), 2);
        assert_eq!(catalog.reviews.len(), 1);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.course("c1").map(|c| c.code.as_str()), Some("CS201"));
        assert!(catalog.course("c9").is_none());
        assert_eq!(catalog.branch("mba").map(|b| b.code.as_str()), Some("MBA"));
        assert!(catalog.branch("ece").is_none());
    }

    #[test]
    fn require_course_reports_not_found() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_matches!(
            catalog.require_course("c9"),
            Err(CoreError::NotFound { entity: "Course", id }) if id == "c9"
        );
    }

    #[test]
    fn featured_courses_keep_order_and_skip_unknown() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let ids: Vec<&str> = catalog
            .featured_courses()
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c2", "c1"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert_matches!(
            Catalog::from_json_str("{ not json"),
            Err(CoreError::Fixture(msg)) if msg.contains("invalid catalog JSON")
        );
    }

    #[test]
    fn rejects_duplicate_course_ids() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let dup = catalog.courses[0].clone();
        catalog.courses.push(dup);
        assert_matches!(
            catalog.validate(),
            Err(CoreError::Fixture(msg)) if msg.contains("duplicate course id 'c1'")
        );
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.courses[0].semester = 9;
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.courses[1].credits = 0;
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.courses[1].teaching = 5.5;
        assert_matches!(
            catalog.validate(),
            Err(CoreError::Fixture(msg)) if msg.contains("course c2") && msg.contains("teaching")
        );

        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.reviews[0].overall_rating = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn dangling_branch_reference_is_allowed() {
        let mut catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        catalog.courses[0].branch = "physics".to_string();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.courses.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        assert_matches!(
            Catalog::load("/nonexistent/catalog.json"),
            Err(CoreError::Fixture(msg)) if msg.contains("cannot read catalog")
        );
    }
}
