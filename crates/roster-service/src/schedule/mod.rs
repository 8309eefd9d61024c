//! Named schedules and conflict detection.

mod collection;
mod conflict;
mod manager;

pub use collection::{Schedule, ScheduleCollection, ScheduleId, ToggleOutcome};
pub use conflict::{Conflict, find_conflict};
pub use manager::ScheduleManager;
