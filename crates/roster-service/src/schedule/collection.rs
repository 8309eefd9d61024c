//! The schedule collection and its state transitions.
//!
//! Every operation takes the current collection by reference and returns a new
//! one. A failed operation returns an error and leaves the caller's value
//! untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roster_core::constants::DEFAULT_SCHEDULE_NAME;
use roster_core::model::Section;

use super::conflict::{Conflict, find_conflict};
use crate::error::{ServiceError, ServiceResult};

/// Opaque schedule identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScheduleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named, ordered set of sections. Section codes are unique within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    id: ScheduleId,
    pub name: String,
    sections: Vec<Section>,
}

impl Schedule {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ScheduleId::new(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ScheduleId {
        self.id
    }

    /// Sections in insertion order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.sections.iter().any(|s| s.code == code)
    }

    #[must_use]
    pub fn total_units(&self) -> f32 {
        self.sections.iter().filter_map(|s| s.units).sum()
    }
}

/// Result of toggling a section in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The add was rejected; the collection is unchanged.
    Rejected(Conflict),
}

/// All schedules plus the active pointer.
///
/// Invariants: at least one schedule exists, and `active` names one of them.
/// Only the transitions below produce new values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleCollection {
    schedules: Vec<Schedule>,
    active: ScheduleId,
}

impl Default for ScheduleCollection {
    fn default() -> Self {
        let schedule = Schedule::new(DEFAULT_SCHEDULE_NAME);
        Self {
            active: schedule.id(),
            schedules: vec![schedule],
        }
    }
}

impl ScheduleCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    #[must_use]
    pub const fn active_id(&self) -> ScheduleId {
        self.active
    }

    /// The active schedule.
    #[must_use]
    pub fn active(&self) -> &Schedule {
        let index = self.position(self.active).unwrap_or_default();
        &self.schedules[index]
    }

    #[must_use]
    pub fn get(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// Ids of the schedules that already contain `code`.
    #[must_use]
    pub fn schedules_containing(&self, code: &str) -> Vec<ScheduleId> {
        self.schedules
            .iter()
            .filter(|s| s.contains(code))
            .map(Schedule::id)
            .collect()
    }

    fn position(&self, id: ScheduleId) -> ServiceResult<usize> {
        self.schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("schedule {id}")))
    }

    /// ## Summary
    /// Appends an empty schedule and makes it active.
    ///
    /// A blank name becomes `"Schedule N"`, N being the new schedule count.
    #[must_use]
    pub fn create_schedule(&self, name: &str) -> (Self, ScheduleId) {
        let name = match name.trim() {
            "" => format!("Schedule {}", self.schedules.len() + 1),
            trimmed => trimmed.to_string(),
        };
        let schedule = Schedule::new(name);
        let id = schedule.id();

        let mut next = self.clone();
        next.schedules.push(schedule);
        next.active = id;
        (next, id)
    }

    /// ## Summary
    /// Removes a schedule, repointing the active id to the first remaining one
    /// if needed.
    ///
    /// ## Errors
    /// `InvalidOperation` when it is the only schedule; `NotFound` for unknown
    /// ids.
    pub fn delete_schedule(&self, id: ScheduleId) -> ServiceResult<Self> {
        if self.schedules.len() <= 1 {
            return Err(ServiceError::InvalidOperation(
                "cannot delete the only schedule".to_string(),
            ));
        }
        let index = self.position(id)?;

        let mut next = self.clone();
        next.schedules.remove(index);
        if next.active == id {
            next.active = next.schedules[0].id;
        }
        Ok(next)
    }

    /// ## Summary
    /// Renames a schedule; the stored name is trimmed.
    ///
    /// ## Errors
    /// `InvalidInput` for a blank name; `NotFound` for unknown ids.
    pub fn rename_schedule(&self, id: ScheduleId, name: &str) -> ServiceResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput(
                "schedule name must not be empty".to_string(),
            ));
        }
        let index = self.position(id)?;

        let mut next = self.clone();
        next.schedules[index].name = name.to_string();
        Ok(next)
    }

    /// ## Summary
    /// Makes `id` the active schedule.
    ///
    /// ## Errors
    /// `NotFound` for unknown ids.
    pub fn set_active(&self, id: ScheduleId) -> ServiceResult<Self> {
        self.position(id)?;
        let mut next = self.clone();
        next.active = id;
        Ok(next)
    }

    /// ## Summary
    /// Removes `section` from the schedule if a section with its code is
    /// present; otherwise adds it unless it conflicts with a scheduled section.
    ///
    /// A rejected add returns an unchanged copy with
    /// [`ToggleOutcome::Rejected`].
    ///
    /// ## Errors
    /// `NotFound` for unknown ids.
    pub fn toggle_section(
        &self,
        id: ScheduleId,
        section: Section,
    ) -> ServiceResult<(Self, ToggleOutcome)> {
        let index = self.position(id)?;
        let schedule = &self.schedules[index];

        if schedule.contains(&section.code) {
            let mut next = self.clone();
            next.schedules[index]
                .sections
                .retain(|s| s.code != section.code);
            return Ok((next, ToggleOutcome::Removed));
        }

        if let Some(existing) = find_conflict(&section, &schedule.sections) {
            let conflict = Conflict {
                conflicts_with: existing.clone(),
                section,
            };
            return Ok((self.clone(), ToggleOutcome::Rejected(conflict)));
        }

        let mut next = self.clone();
        next.schedules[index].sections.push(section);
        Ok((next, ToggleOutcome::Added))
    }
}
