//! "Required for" lookups.

use regex::Regex;

use roster_core::model::Course;

use super::index::Catalog;

/// Matches a mention of `tag` immediately followed by `number`, optionally
/// separated by one space. `CSEN 10` does not match `CSEN 10L`.
fn mention_pattern(tag: &str, number: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)\b{}\s?{}\b",
        regex::escape(tag),
        regex::escape(number)
    ))
    .ok()
}

impl Catalog {
    /// ## Summary
    /// Courses whose requisite text mentions `course`, in catalog order.
    ///
    /// A slash tag (`MATH/CSCI`) is looked up under each alternative.
    #[must_use]
    pub fn required_for(&self, course: &Course) -> Vec<&Course> {
        let patterns: Vec<Regex> = course
            .tag
            .split('/')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .filter_map(|tag| mention_pattern(tag, &course.number))
            .collect();
        if patterns.is_empty() {
            return Vec::new();
        }

        self.courses()
            .iter()
            .filter(|other| other.id() != course.id())
            .filter(|other| patterns.iter().any(|p| p.is_match(&other.prerequisites)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_courses([
            Course::new("CSEN", "10", "Intro", "", ""),
            Course::new("CSEN", "10L", "Intro Lab", "", "Corequisite: CSEN 10."),
            Course::new("CSEN", "11", "Next", "", "CSEN 10 or CSEN10L"),
            Course::new("CSEN", "12", "Data Structures", "", "CSEN 11"),
            Course::new("MATH/CSCI", "146", "Automata", "", ""),
            Course::new("CSEN", "179", "Theory", "", "CSCI 146 and senior standing"),
        ])
    }

    fn ids<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
        courses.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn finds_mentions() {
        let catalog = catalog();
        let intro = catalog.find_by_code("CSEN 10").expect("course");
        assert_eq!(ids(&catalog.required_for(intro)), vec!["CSEN10L", "CSEN11"]);

        let lab = catalog.find_by_code("CSEN 10L").expect("course");
        assert_eq!(ids(&catalog.required_for(lab)), vec!["CSEN11"]);
    }

    #[test]
    fn slash_tags_match_each_alternative() {
        let catalog = catalog();
        let automata = catalog.get("MATH/CSCI146").expect("course");
        assert_eq!(ids(&catalog.required_for(automata)), vec!["CSEN179"]);
    }

    #[test]
    fn nothing_requires_leaf() {
        let catalog = catalog();
        let ds = catalog.get("CSEN12").expect("course");
        assert!(catalog.required_for(ds).is_empty());
    }
}
