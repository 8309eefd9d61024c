//! Prerequisite and corequisite text.
//!
//! Catalog requisite text is unstructured ("Prerequisite: CSEN 10.
//! Corequisite: CSEN 10L."). Splitting tries a fixed list of corequisite label
//! patterns; cleanup applies an ordered list of rewrite rules.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

/// Requisite text split into its two clauses. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Requisites {
    pub prerequisites: String,
    pub corequisites: String,
}

impl Requisites {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty() && self.corequisites.is_empty()
    }
}

struct LabelPattern {
    name: &'static str,
    regex: Regex,
}

/// Corequisite labels, most specific first. Group 1 is the clause, which runs
/// to the next period or the end of the text.
static COREQUISITE_LABELS: LazyLock<Vec<LabelPattern>> = LazyLock::new(|| {
    [
        ("co-requisite", r"(?i)co-?requisites?[:.](.+?)(?:\.|$)"),
        ("corequisite", r"(?i)corequisites?[:.](.+?)(?:\.|$)"),
        (
            "concurrent",
            r"(?i)\bconcurrent(?:ly)? (?:with|enroll(?:ment)? in)(.+?)(?:\.|$)",
        ),
        (
            "take-concurrently",
            r"(?i)\btake concurrently(?:ly)?[ :](.+?)(?:\.|$)",
        ),
        (
            "must-be-taken-concurrent",
            r"(?i)\bmust be taken concurrent(?:ly)? with(.+?)(?:\.|$)",
        ),
        (
            "recommended-co-requisite",
            r"(?i)recommended co-?requisites?[:.](.+?)(?:\.|$)",
        ),
    ]
    .into_iter()
    .map(|(name, pattern)| LabelPattern {
        name,
        regex: Regex::new(pattern).expect("corequisite label pattern is valid"),
    })
    .collect()
});

/// Words that mark a corequisite anywhere in the text.
static COREQUISITE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)concurrent|co-?requisite").expect("corequisite keyword pattern is valid")
});

enum Rewrite {
    Template(&'static str),
    With(fn(&Captures<'_>) -> String),
}

struct NormalizationRule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl NormalizationRule {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("normalization pattern is valid"),
            rewrite,
        }
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, *template),
            Rewrite::With(rewrite) => {
                self.pattern.replace_all(text, |caps: &Captures<'_>| rewrite(caps))
            }
        }
    }
}

/// Cleanup rules, applied in order.
static NORMALIZATION_RULES: LazyLock<Vec<NormalizationRule>> = LazyLock::new(|| {
    vec![
        NormalizationRule::new(
            "prerequisite-label",
            r"(?i)^\s*pre-?req(?:uisite)?s?\s*:?\s*",
            Rewrite::Template(""),
        ),
        NormalizationRule::new(
            "corequisite-label",
            r"(?i)^\s*(?:recommended\s+)?co-?req(?:uisite)?s?\s*:?\s*",
            Rewrite::Template(""),
        ),
        NormalizationRule::new("leading-article", r"(?i)^\s*(?:a|the)\s+", Rewrite::Template("")),
        NormalizationRule::new("split-decimal", r"(\d)\s+(\d)", Rewrite::Template("$1.$2")),
        NormalizationRule::new(
            "gpa-decimal",
            r"(?i)\b(GPA of )(\d+)(\.\d+)?\b",
            Rewrite::With(|caps| match caps.get(3) {
                Some(_) => caps[0].to_string(),
                None => format!("{}{}.0", &caps[1], &caps[2]),
            }),
        ),
        NormalizationRule::new("trailing-period", r"\s*\.\s*$", Rewrite::Template("")),
        NormalizationRule::new(
            "orphan-period",
            r"(\d?)\s*\.\s*(\d?)",
            Rewrite::With(|caps| {
                let (before, after) = (&caps[1], &caps[2]);
                if before.is_empty() || after.is_empty() {
                    format!("{before} {after}")
                } else {
                    format!("{before}.{after}")
                }
            }),
        ),
        NormalizationRule::new("whitespace", r"\s+", Rewrite::Template(" ")),
    ]
});

/// ## Summary
/// Cleans up one requisite clause.
///
/// Strips leading labels and articles, repairs split decimals
/// (`"3 0"` to `"3.0"`), writes GPAs with one decimal, and drops trailing and
/// orphan periods. A period between two digits is kept as a decimal point.
#[must_use]
pub fn normalize_requisite(text: &str) -> String {
    let mut current = text.trim().to_string();
    for rule in NORMALIZATION_RULES.iter() {
        let rewritten = match rule.apply(&current) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        tracing::trace!(rule = rule.name, before = %current, after = %rewritten, "normalized");
        current = rewritten;
    }
    current.trim().to_string()
}

/// ## Summary
/// Splits requisite text into prerequisite and corequisite clauses.
///
/// The first corequisite label that matches wins; its whole span (label and
/// clause) is cut out and what remains is the prerequisite clause. Without a
/// label the whole text is prerequisite text.
#[must_use]
pub fn split_requisites(text: &str) -> Requisites {
    let text = text.trim();
    if text.is_empty() {
        return Requisites::default();
    }

    for label in COREQUISITE_LABELS.iter() {
        let Some(caps) = label.regex.captures(text) else {
            continue;
        };
        let (Some(whole), Some(clause)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        tracing::trace!(label = label.name, "corequisite label matched");
        let remainder = format!("{} {}", &text[..whole.start()], &text[clause.end()..]);
        return Requisites {
            prerequisites: normalize_requisite(&remainder),
            corequisites: normalize_requisite(clause.as_str()),
        };
    }

    Requisites {
        prerequisites: normalize_requisite(text),
        corequisites: String::new(),
    }
}

/// Whether requisite text mentions a corequisite in any form, including
/// phrasings like "may be taken concurrently" that carry no clause.
#[must_use]
pub fn has_corequisites(text: &str) -> bool {
    COREQUISITE_KEYWORD.is_match(text)
}

/// A tag (or slash-separated tags) followed by a course number.
static COURSE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,4}(?:/[A-Z]{2,4})*)\s?(\d{1,3}[A-Z]?)\b")
        .expect("course mention pattern is valid")
});

/// ## Summary
/// Course codes mentioned in requisite text, as `"TAG NUM"`, in order of first
/// appearance. Slash tags expand to one code per alternative.
#[must_use]
pub fn referenced_codes(text: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for caps in COURSE_MENTION.captures_iter(text) {
        for tag in caps[1].split('/') {
            let code = format!("{tag} {}", &caps[2]);
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn splits_labelled_corequisite() {
        let split = split_requisites("Prerequisite: CSEN 10. Corequisite: CSEN 10L.");
        assert_eq!(split.prerequisites, "CSEN 10");
        assert_eq!(split.corequisites, "CSEN 10L");
    }

    #[test]
    fn no_label_means_all_prerequisite() {
        let split = split_requisites("CSEN 12 and MATH 13.");
        assert_eq!(split.prerequisites, "CSEN 12 and MATH 13");
        assert!(split.corequisites.is_empty());
        assert!(split_requisites("   ").is_empty());
    }

    #[test]
    fn concurrent_enrollment_phrasing() {
        let split = split_requisites("MATH 12; concurrent enrollment in PHYS 31.");
        assert_eq!(split.corequisites, "PHYS 31");
        assert_eq!(split.prerequisites, "MATH 12;");
    }

    #[test]
    fn take_concurrently_phrasing() {
        let split = split_requisites("Take concurrently: CSEN 20L");
        assert_eq!(split.corequisites, "CSEN 20L");
        assert!(split.prerequisites.is_empty());
    }

    #[test]
    fn normalization_rules() {
        assert_eq!(normalize_requisite("Prerequisites: CSEN 12."), "CSEN 12");
        assert_eq!(normalize_requisite("the instructor's approval"), "instructor's approval");
        assert_eq!(normalize_requisite("Minimum GPA of 3 0"), "Minimum GPA of 3.0");
        assert_eq!(
            normalize_requisite("GPA of 3 and junior standing"),
            "GPA of 3.0 and junior standing"
        );
        assert_eq!(normalize_requisite("GPA of 2.75"), "GPA of 2.75");
        assert_eq!(normalize_requisite("MATH 11. Junior standing."), "MATH 11 Junior standing");
        assert_eq!(normalize_requisite("  CSEN   10  "), "CSEN 10");
    }

    #[test]
    fn corequisite_presence() {
        assert!(has_corequisites("Corequisite: CSEN 10L."));
        assert!(has_corequisites("May be taken concurrently with MATH 14."));
        assert!(has_corequisites("Recommended co-requisite: ENGR 1."));
        assert!(!has_corequisites("CSEN 12 and MATH 13."));
    }

    #[test]
    fn extracts_codes() {
        assert_eq!(
            referenced_codes("MATH/CSCI 146 and CSEN 10L, or CSEN12."),
            vec!["MATH 146", "CSCI 146", "CSEN 10L", "CSEN 12"]
        );
        assert!(referenced_codes("Junior standing").is_empty());
    }
}
