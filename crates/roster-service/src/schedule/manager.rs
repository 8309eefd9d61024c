//! Publishes schedule-collection transitions.

use std::sync::Arc;

use roster_core::model::Section;

use super::collection::{Schedule, ScheduleCollection, ScheduleId, ToggleOutcome};
use crate::error::ServiceResult;

/// Owns the current [`ScheduleCollection`] behind a shared snapshot.
///
/// Each mutation computes a new collection from the current one and swaps the
/// pointer. Readers holding an earlier [`snapshot`](Self::snapshot) keep seeing
/// the state they took; nobody observes a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct ScheduleManager {
    state: Arc<ScheduleCollection>,
}

impl ScheduleManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_collection(collection: ScheduleCollection) -> Self {
        Self {
            state: Arc::new(collection),
        }
    }

    /// The current state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ScheduleCollection> {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn active(&self) -> &Schedule {
        self.state.active()
    }

    #[must_use]
    pub fn get(&self, id: ScheduleId) -> Option<&Schedule> {
        self.state.get(id)
    }

    #[must_use]
    pub fn schedules_containing(&self, code: &str) -> Vec<ScheduleId> {
        self.state.schedules_containing(code)
    }

    fn publish(&mut self, next: ScheduleCollection) {
        self.state = Arc::new(next);
    }

    /// ## Summary
    /// Creates an empty schedule and makes it active.
    #[tracing::instrument(skip(self))]
    pub fn create_schedule(&mut self, name: &str) -> ScheduleId {
        let (next, id) = self.state.create_schedule(name);
        self.publish(next);
        tracing::info!(%id, "schedule created");
        id
    }

    /// ## Summary
    /// Deletes a schedule.
    ///
    /// ## Errors
    /// `InvalidOperation` when it is the only schedule; `NotFound` for unknown
    /// ids. The state is unchanged on error.
    #[tracing::instrument(skip(self))]
    pub fn delete_schedule(&mut self, id: ScheduleId) -> ServiceResult<()> {
        let next = self.state.delete_schedule(id).inspect_err(|error| {
            tracing::warn!(%error, "delete rejected");
        })?;
        self.publish(next);
        tracing::info!("schedule deleted");
        Ok(())
    }

    /// ## Summary
    /// Renames a schedule.
    ///
    /// ## Errors
    /// `InvalidInput` for a blank name; `NotFound` for unknown ids.
    #[tracing::instrument(skip(self))]
    pub fn rename_schedule(&mut self, id: ScheduleId, name: &str) -> ServiceResult<()> {
        let next = self.state.rename_schedule(id, name).inspect_err(|error| {
            tracing::warn!(%error, "rename rejected");
        })?;
        self.publish(next);
        Ok(())
    }

    /// ## Summary
    /// Makes `id` the active schedule.
    ///
    /// ## Errors
    /// `NotFound` for unknown ids.
    #[tracing::instrument(skip(self))]
    pub fn set_active(&mut self, id: ScheduleId) -> ServiceResult<()> {
        let next = self.state.set_active(id)?;
        self.publish(next);
        Ok(())
    }

    /// ## Summary
    /// Adds or removes a section. Conflicting adds are reported in the outcome
    /// and leave the state as it was.
    ///
    /// ## Errors
    /// `NotFound` for unknown ids.
    #[tracing::instrument(skip(self, section), fields(section = %section.code))]
    pub fn toggle_section(
        &mut self,
        id: ScheduleId,
        section: Section,
    ) -> ServiceResult<ToggleOutcome> {
        let (next, outcome) = self.state.toggle_section(id, section)?;
        match &outcome {
            ToggleOutcome::Rejected(conflict) => {
                tracing::warn!(%conflict, "section rejected");
                return Ok(outcome);
            }
            ToggleOutcome::Added => tracing::info!("section added"),
            ToggleOutcome::Removed => tracing::info!("section removed"),
        }
        self.publish(next);
        Ok(outcome)
    }
}
