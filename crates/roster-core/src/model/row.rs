//! Raw row records as delivered by the external loader.
//!
//! Field names match the source spreadsheets, so these deserialize directly
//! from CSV headers or JSON objects. Every field is optional text; the
//! conversions into [`Course`](super::Course) and [`Section`](super::Section)
//! decide which rows survive.

use serde::{Deserialize, Serialize};

/// One row of the course catalog export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pre_reqs: Option<String>,
}

impl CatalogRow {
    /// Rows without a non-blank tag are dropped.
    #[must_use]
    pub fn has_tag(&self) -> bool {
        self.tag.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// One row of the registrar's section export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRow {
    #[serde(rename = "Course Section", default)]
    pub course_section: Option<String>,
    #[serde(rename = "Units", default)]
    pub units: Option<String>,
    #[serde(rename = "Meeting Patterns", default)]
    pub meeting_patterns: Option<String>,
    #[serde(rename = "Locations", default)]
    pub locations: Option<String>,
    #[serde(rename = "All Instructors", default)]
    pub instructors: Option<String>,
    #[serde(rename = "Course Tags", default)]
    pub course_tags: Option<String>,
    #[serde(rename = "Overlapping Courses", default)]
    pub overlapping_courses: Option<String>,
    #[serde(rename = "Start Date", default)]
    pub start_date: Option<String>,
    #[serde(rename = "End Date", default)]
    pub end_date: Option<String>,
}
