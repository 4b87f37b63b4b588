/// Course, branch and review identifiers are opaque fixture strings.
pub type EntityId = String;

/// Review dates travel as ISO `YYYY-MM-DD` strings.
pub type ReviewDate = chrono::NaiveDate;
