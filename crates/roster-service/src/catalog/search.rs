//! Prioritized catalog search.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use roster_core::model::Course;

use super::index::{Catalog, CourseFilter};

/// Letters (with optional slash alternatives) followed by a number with an
/// optional letter suffix: `csen 169`, `MATH/CSCI 146`, `CSEN10L`.
static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([a-z]{1,4}(?:/[a-z]{1,4})*)\s*(\d+[a-z]?)")
        .expect("course code pattern is valid")
});

/// An explicit course code typed as a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCode {
    /// Upper-cased tag alternatives.
    pub tags: Vec<String>,
    /// Upper-cased number, possibly with a letter suffix.
    pub number: String,
}

impl CourseCode {
    /// Reads a course code from the start of `query`.
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let caps = COURSE_CODE.captures(query)?;
        Some(Self {
            tags: caps[1].split('/').map(str::to_ascii_uppercase).collect(),
            number: caps[2].to_ascii_uppercase(),
        })
    }

    /// Some tag alternative matches one of the course's (possibly
    /// cross-listed) tags and the number contains the digits.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let tag_matches = course
            .tag
            .split('/')
            .any(|listed| self.tags.iter().any(|tag| listed.trim().eq_ignore_ascii_case(tag)));
        tag_matches && course.number.to_ascii_uppercase().contains(&self.number)
    }
}

type StageMatcher = fn(&Course, &str) -> bool;

/// Fuzzy stages in priority order. A course lands in the first stage it
/// matches.
const STAGES: [StageMatcher; 5] = [
    |course, q| course.tag.to_lowercase().starts_with(q),
    |course, q| course.tag.to_lowercase().contains(q),
    |course, q| course.number.to_lowercase().contains(q),
    |course, q| course.name.to_lowercase().contains(q),
    |course, q| course.description.to_lowercase().contains(q),
];

/// ## Summary
/// Searches `courses` in priority order.
///
/// 1. A query shaped like a course code returns the courses it names, if any.
/// 2. An exact (case-insensitive) tag match returns that whole department.
/// 3. Otherwise courses are ranked by tag prefix, tag substring, number,
///    name, then description, without duplicates.
///
/// A blank query returns every course.
#[must_use]
pub fn search_courses<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
    query: &str,
) -> Vec<&'a Course> {
    let courses: Vec<&Course> = courses.into_iter().collect();
    let query = query.trim();
    if query.is_empty() {
        return courses;
    }

    if let Some(code) = CourseCode::parse(query) {
        let hits: Vec<&Course> = courses.iter().copied().filter(|c| code.matches(c)).collect();
        if !hits.is_empty() {
            tracing::trace!(query, hits = hits.len(), "matched explicit course code");
            return hits;
        }
    }

    let q = query.to_lowercase();
    let exact: Vec<&Course> = courses
        .iter()
        .copied()
        .filter(|c| c.tag.to_lowercase() == q)
        .collect();
    if !exact.is_empty() {
        tracing::trace!(query, hits = exact.len(), "matched department tag");
        return exact;
    }

    let mut stages: [Vec<&Course>; STAGES.len()] = Default::default();
    for course in courses {
        if let Some(stage) = STAGES.iter().position(|matcher| matcher(course, &q)) {
            stages[stage].push(course);
        }
    }

    let mut seen = HashSet::new();
    stages
        .into_iter()
        .flatten()
        .filter(|c| seen.insert(c.id()))
        .collect()
}

impl Catalog {
    /// ## Summary
    /// Filters the catalog, then runs [`search_courses`] over what remains.
    #[must_use]
    pub fn search(&self, query: &str, filter: &CourseFilter) -> Vec<&Course> {
        search_courses(self.filtered(filter), query)
    }
}
