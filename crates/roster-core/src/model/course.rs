//! Catalog courses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::UPPER_DIVISION_FLOOR;
use crate::error::CoreError;

/// Division of a course, derived from its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Lower,
    Upper,
}

impl CourseLevel {
    /// ## Summary
    /// Derives the level from a course number's leading digits.
    ///
    /// `"169"` and `"100A"` are upper division; `"10L"` is lower. Numbers with
    /// no leading digits default to lower division.
    #[must_use]
    pub fn from_number(number: &str) -> Self {
        let digits: String = number
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        match digits.parse::<u32>() {
            Ok(n) if n >= UPPER_DIVISION_FLOOR => Self::Upper,
            _ => Self::Lower,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            other => Err(CoreError::InvalidInput(format!(
                "unknown course level {other:?}, expected \"lower\" or \"upper\""
            ))),
        }
    }
}

/// A catalog course.
///
/// Identity is the tag followed directly by the number (`"CSEN169"`) and is
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    pub tag: String,
    pub number: String,
    pub name: String,
    /// Description with any requisite clause removed.
    pub description: String,
    /// Raw requisite text, possibly empty.
    pub prerequisites: String,
    pub level: CourseLevel,
}

impl Course {
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        prerequisites: impl Into<String>,
    ) -> Self {
        let tag = tag.into().trim().to_string();
        let number = number.into().trim().to_string();
        Self {
            id: format!("{tag}{number}"),
            level: CourseLevel::from_number(&number),
            tag,
            number,
            name: name.into(),
            description: description.into(),
            prerequisites: prerequisites.into(),
        }
    }

    /// Identity key: tag concatenated with number.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"TAG NUM"`, as printed in the catalog.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{} {}", self.tag, self.number)
    }

    /// `"TAG NUM - Name"`, the list label used by search results.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {} - {}", self.tag, self.number, self.name)
    }

    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.trim().is_empty()
    }
}
