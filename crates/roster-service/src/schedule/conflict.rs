//! Pairwise meeting conflicts.

use serde::Serialize;

use roster_core::model::Section;

use crate::meeting::section_meeting;

/// A rejected addition: the section being added and the scheduled section it
/// collides with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub section: Section,
    pub conflicts_with: Section,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} conflicts with {}",
            self.section.code, self.conflicts_with.code
        )
    }
}

/// ## Summary
/// Finds the first scheduled section that meets at the same time as
/// `candidate`.
///
/// Returns `None` when `candidate` has no fixed weekly time. Sections in
/// `existing` without a parseable pattern are ignored. The earliest match in
/// iteration order wins.
#[must_use]
pub fn find_conflict<'a>(
    candidate: &Section,
    existing: impl IntoIterator<Item = &'a Section>,
) -> Option<&'a Section> {
    let meeting = section_meeting(candidate);
    if !meeting.is_scheduled() {
        return None;
    }
    existing
        .into_iter()
        .find(|other| meeting.overlaps(&section_meeting(other)))
}
