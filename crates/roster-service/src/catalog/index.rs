//! Catalog construction and filtering.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use roster_core::model::{CatalogRow, Course, CourseLevel};

/// Labels that open the requisite clause of a description.
static REQUISITE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:pre-?req-?uisites?:|prerequisites?:|prereqs?:|co-?req-?uisites?:|coreqs?:|successful completion of)",
    )
    .expect("requisite label pattern is valid")
});

/// ## Summary
/// Returns the part of a description before its requisite clause, trimmed.
#[must_use]
pub fn strip_requisite_clause(description: &str) -> &str {
    REQUISITE_LABEL
        .find(description)
        .map_or(description, |m| &description[..m.start()])
        .trim()
}

/// Indexed catalog courses in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

/// Restricts searches to one department and/or level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Exact tag, compared case-insensitively.
    pub department: Option<String>,
    pub level: Option<CourseLevel>,
}

impl CourseFilter {
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let department = self
            .department
            .as_deref()
            .is_none_or(|tag| course.tag.eq_ignore_ascii_case(tag.trim()));
        let level = self.level.is_none_or(|level| course.level == level);
        department && level
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.level.is_none()
    }
}

/// Course count for one department tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStat {
    pub tag: String,
    pub courses: usize,
}

impl Catalog {
    /// ## Summary
    /// Builds a catalog from raw rows.
    ///
    /// Rows without a tag are dropped. Descriptions lose their requisite
    /// clause. Rows sharing an identity collapse into one course: the last
    /// row's fields win, the first row's position is kept.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Self {
        let mut dropped = 0usize;
        let catalog = Self::from_courses(rows.into_iter().filter_map(|row| {
            if row.has_tag() {
                Some(course_from_row(row))
            } else {
                dropped += 1;
                None
            }
        }));
        tracing::debug!(courses = catalog.len(), dropped, "catalog indexed");
        catalog
    }

    /// ## Summary
    /// Indexes already-built courses, collapsing duplicate identities the same
    /// way [`from_rows`](Self::from_rows) does.
    #[must_use]
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut indexed: Vec<Course> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for course in courses {
            match positions.get(course.id()) {
                Some(&index) => indexed[index] = course,
                None => {
                    positions.insert(course.id().to_string(), indexed.len());
                    indexed.push(course);
                }
            }
        }

        Self { courses: indexed }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Looks up a course by identity (`"CSEN169"`).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    /// ## Summary
    /// Looks up a course by its printed code, ignoring case and spacing
    /// (`"csen 169"`, `"CSEN169"`).
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        let wanted: String = code
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        self.courses
            .iter()
            .find(|c| c.id().eq_ignore_ascii_case(&wanted))
    }

    /// Courses passing `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Sorted, unique department tags.
    #[must_use]
    pub fn departments(&self) -> Vec<&str> {
        self.department_stats_map().into_keys().collect()
    }

    /// Course counts per department, sorted by tag.
    #[must_use]
    pub fn department_stats(&self) -> Vec<DepartmentStat> {
        self.department_stats_map()
            .into_iter()
            .map(|(tag, courses)| DepartmentStat {
                tag: tag.to_string(),
                courses,
            })
            .collect()
    }

    fn department_stats_map(&self) -> BTreeMap<&str, usize> {
        let mut stats = BTreeMap::new();
        for course in &self.courses {
            *stats.entry(course.tag.as_str()).or_insert(0) += 1;
        }
        stats
    }
}

fn course_from_row(row: CatalogRow) -> Course {
    let description = row.description.unwrap_or_default();
    Course::new(
        row.tag.unwrap_or_default(),
        row.number.unwrap_or_default(),
        row.course.unwrap_or_default().trim(),
        strip_requisite_clause(&description),
        row.pre_reqs.unwrap_or_default().trim(),
    )
}
