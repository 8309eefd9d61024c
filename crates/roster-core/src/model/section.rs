//! Course sections offered in a term.

use serde::{Deserialize, Serialize};

use super::SectionRow;

/// One offered instance of a course.
///
/// The meeting pattern is kept as the registrar wrote it; `roster-service`
/// parses it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Course-section code, unique within a term.
    pub code: String,
    pub meeting_pattern: String,
    pub location: String,
    pub instructor: String,
    pub units: Option<f32>,
    pub tags: Vec<String>,
    pub overlap_note: String,
}

impl Section {
    /// Creates a section with only a code and meeting pattern.
    #[must_use]
    pub fn new(code: impl Into<String>, meeting_pattern: impl Into<String>) -> Self {
        Self {
            code: code.into().trim().to_string(),
            meeting_pattern: meeting_pattern.into(),
            location: String::new(),
            instructor: String::new(),
            units: None,
            tags: Vec::new(),
            overlap_note: String::new(),
        }
    }

    /// ## Summary
    /// Converts a raw row into a section.
    ///
    /// Returns `None` for rows without a non-blank "Course Section".
    #[must_use]
    pub fn from_row(row: &SectionRow) -> Option<Self> {
        let code = row.course_section.as_deref()?.trim();
        if code.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            meeting_pattern: text(row.meeting_patterns.as_ref()),
            location: text(row.locations.as_ref()),
            instructor: text(row.instructors.as_ref()),
            units: row.units.as_deref().and_then(parse_units),
            tags: split_tags(row.course_tags.as_deref().unwrap_or_default()),
            overlap_note: text(row.overlapping_courses.as_ref()),
        })
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: f32) -> Self {
        self.units = Some(units);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

fn text(value: Option<&String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Unit counts arrive as `"4"`, `"4.0"`, or ranges like `"1 - 5"`; ranges keep
/// their lower bound.
fn parse_units(raw: &str) -> Option<f32> {
    raw.split('-').next()?.trim().parse::<f32>().ok()
}

/// Tags are newline- or semicolon-separated in the export.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(['\n', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
