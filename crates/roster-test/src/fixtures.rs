//! Sample registrar and catalog data.

use roster_core::model::{CatalogRow, SectionRow};

/// A small catalog export in CSV form.
pub const CATALOG_CSV: &str = "\
tag,number,course,description,pre_reqs
CSEN,10,Introduction to Programming,Variables and loops. Prerequisite: none.,
CSEN,10L,Programming Lab,Hands-on lab.,Corequisite: CSEN 10.
CSEN,12,Data Structures,Lists and trees.,CSEN 11 with a grade of C- or better.
CSEN,146,Computer Networks,\"Protocols, layering.\",Prerequisite: CSEN 12. Corequisite: CSEN 146L.
CSEN,169,Web Infrastructure,HTTP and caching.,CSEN 146.
MATH,14,Calculus IV,Series and sequences.,Minimum GPA of 3 and MATH 13.
MATH/CSCI,146,Automata,Languages and machines.,
,999,Orphan,No tag.,
CSEN,10,Introduction to Programming in C,Pointers. Prerequisite: none.,
";

/// A small section export in JSON form.
pub const SECTIONS_JSON: &str = r#"[
  {
    "Course Section": "CSEN 169-1 - Web Infrastructure",
    "Units": "4",
    "Meeting Patterns": "M W F | 9:15 AM - 10:20 AM",
    "Locations": "Heafey, Room 101",
    "All Instructors": "Ada Lovelace",
    "Course Tags": "Core: Engineering\nPathway: Web",
    "Start Date": "01/06/2025",
    "End Date": "01/17/2025"
  },
  {
    "Course Section": "MATH 14-1 - Calculus IV",
    "Units": "4",
    "Meeting Patterns": "M W | 10:00 AM - 11:05 AM",
    "Locations": "O'Connor 204",
    "All Instructors": "Emmy Noether"
  },
  {
    "Course Section": "CSEN 146-1 - Computer Networks",
    "Units": "4",
    "Meeting Patterns": "TTH 1:00-2:45 PM",
    "Locations": "Heafey 102",
    "All Instructors": "Radia Perlman"
  },
  {
    "Course Section": "CSEN 194-1 - Senior Design",
    "Units": "2",
    "Meeting Patterns": "TBA"
  },
  {
    "Course Section": "  ",
    "Units": "4"
  }
]"#;

/// ## Summary
/// Parses [`CATALOG_CSV`].
///
/// ## Panics
/// Panics if the fixture is malformed.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are static test data")]
pub fn catalog_rows() -> Vec<CatalogRow> {
    roster_app::loader::read_rows(CATALOG_CSV.as_bytes(), roster_app::loader::RowFormat::Csv)
        .expect("catalog fixture parses")
}

/// ## Summary
/// Parses [`SECTIONS_JSON`].
///
/// ## Panics
/// Panics if the fixture is malformed.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are static test data")]
pub fn section_rows() -> Vec<SectionRow> {
    roster_app::loader::read_rows(SECTIONS_JSON.as_bytes(), roster_app::loader::RowFormat::Json)
        .expect("section fixture parses")
}
