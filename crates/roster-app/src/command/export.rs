use std::io::Write;

use roster_core::model::{Section, SectionRow};
use roster_service::meeting::section_meeting;
use roster_service::schedule::{Conflict, ScheduleId, ScheduleManager, ToggleOutcome};

use crate::error::{AppError, AppResult};
use crate::loader::sections_from_rows;

/// What happened to one requested section code.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedSection {
    Added { code: String, scheduled: bool },
    AlreadyAdded(String),
    Rejected(Conflict),
    Missing(String),
}

/// The schedule built from requested codes, plus a per-code report.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub manager: ScheduleManager,
    pub entries: Vec<PlannedSection>,
}

impl ExportPlan {
    /// ## Summary
    /// Writes one line per requested code.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn report(&self, out: &mut impl Write) -> AppResult<()> {
        for entry in &self.entries {
            match entry {
                PlannedSection::Added {
                    code,
                    scheduled: true,
                } => writeln!(out, "added {code}")?,
                PlannedSection::Added {
                    code,
                    scheduled: false,
                } => writeln!(out, "added {code} (no fixed meeting time, not exported)")?,
                PlannedSection::AlreadyAdded(code) => writeln!(out, "already added {code}")?,
                PlannedSection::Rejected(conflict) => writeln!(out, "skipped {conflict}")?,
                PlannedSection::Missing(code) => writeln!(out, "not found {code}")?,
            }
        }
        Ok(())
    }
}

/// Section code comparison: exact, or `wanted` followed by a non-alphanumeric
/// character, so `CSEN 169-1` matches `CSEN 169-1 - Web Infrastructure` but
/// not `CSEN 169-10`.
fn code_matches(code: &str, wanted: &str) -> bool {
    let code = code.to_ascii_uppercase();
    let wanted = wanted.trim().to_ascii_uppercase();
    code.strip_prefix(&wanted)
        .is_some_and(|rest| rest.chars().next().is_none_or(|c| !c.is_ascii_alphanumeric()))
}

/// ## Summary
/// Adds the requested sections, in order, to a fresh schedule.
///
/// A code names every section it prefixes, so `CSEN 169` adds each of its
/// sections in catalog order. Conflicting sections are rejected and reported;
/// codes naming no section are reported as missing.
///
/// ## Errors
/// Returns `InvalidArgument` when no codes are given.
pub fn plan_schedule(rows: &[SectionRow], codes: &[String]) -> AppResult<ExportPlan> {
    let wanted: Vec<&str> = codes
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    if wanted.is_empty() {
        return Err(AppError::InvalidArgument(
            "at least one section code is required".to_string(),
        ));
    }

    let sections = sections_from_rows(rows);
    let mut manager = ScheduleManager::new();
    let schedule = manager.active().id();
    let mut entries = Vec::with_capacity(wanted.len());

    for code in wanted {
        let mut matched = false;
        for section in sections.iter().filter(|s| code_matches(&s.code, code)) {
            matched = true;
            if manager.active().contains(&section.code) {
                entries.push(PlannedSection::AlreadyAdded(section.code.clone()));
            } else {
                entries.push(add(&mut manager, schedule, section.clone())?);
            }
        }
        if !matched {
            tracing::warn!(code, "no section with this code");
            entries.push(PlannedSection::Missing(code.to_string()));
        }
    }

    Ok(ExportPlan { manager, entries })
}

fn add(
    manager: &mut ScheduleManager,
    schedule: ScheduleId,
    section: Section,
) -> AppResult<PlannedSection> {
    let code = section.code.clone();
    let scheduled = section_meeting(&section).is_scheduled();
    Ok(match manager.toggle_section(schedule, section)? {
        ToggleOutcome::Rejected(conflict) => PlannedSection::Rejected(conflict),
        ToggleOutcome::Added | ToggleOutcome::Removed => PlannedSection::Added { code, scheduled },
    })
}
