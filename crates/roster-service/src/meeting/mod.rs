//! Meeting-pattern parsing.
//!
//! Registrar exports describe meeting times as free text
//! (`"M W F | 9:15 AM - 10:20 AM"`, `"TTH 1:00-2:45 PM"`, `"TBA"`). This module
//! turns that text into a [`MeetingSpec`]. Day and time extraction are each an
//! ordered list of named strategies; the first one that produces a result wins.

mod days;
mod pattern;
mod range;
mod time;

pub use days::parse_days;
pub use pattern::{parse_meeting_pattern, try_parse_meeting_pattern};
pub use range::{TimeRange, find_time_range};
pub use time::parse_time;

use chrono::Weekday;
use roster_core::model::{Section, WeekdaySet};

/// Structured meeting information parsed from a section's pattern text.
///
/// Times are fractional hours of the day (`13.5` is 1:30 PM). When both are
/// present, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeetingSpec {
    pub weekdays: WeekdaySet,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl MeetingSpec {
    /// The `[start, end)` interval, if both ends parsed.
    #[must_use]
    pub fn interval(&self) -> Option<(f64, f64)> {
        self.start.zip(self.end)
    }

    /// Whether this meeting has both weekdays and a time range.
    ///
    /// Unscheduled meetings never conflict and never appear in a weekly grid.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        !self.weekdays.is_empty() && self.interval().is_some()
    }

    /// ## Summary
    /// Whether two meetings share a weekday and overlap in time.
    ///
    /// Intervals are closed-open, so a class ending at 10:00 does not collide
    /// with one starting at 10:00.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if !self.weekdays.intersects(other.weekdays) {
            return false;
        }
        match (self.interval(), other.interval()) {
            (Some((s1, e1)), Some((s2, e2))) => s1 < e2 && s2 < e1,
            _ => false,
        }
    }

    /// One block per meeting day, Monday first. Empty when unscheduled.
    #[must_use]
    pub fn grid_blocks(&self) -> Vec<GridBlock> {
        let Some((start, end)) = self.interval() else {
            return Vec::new();
        };
        self.weekdays
            .iter()
            .map(|weekday| GridBlock {
                weekday,
                start,
                end,
            })
            .collect()
    }
}

/// A section's placement on a weekly grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBlock {
    pub weekday: Weekday,
    pub start: f64,
    pub end: f64,
}

impl GridBlock {
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Parses the meeting pattern of a section.
#[must_use]
pub fn section_meeting(section: &Section) -> MeetingSpec {
    parse_meeting_pattern(&section.meeting_pattern)
}

/// ## Summary
/// Weekly-grid blocks for every scheduled section, in section order.
#[must_use]
pub fn grid_blocks<'a>(
    sections: impl IntoIterator<Item = &'a Section>,
) -> Vec<(&'a Section, GridBlock)> {
    sections
        .into_iter()
        .flat_map(|section| {
            section_meeting(section)
                .grid_blocks()
                .into_iter()
                .map(move |block| (section, block))
        })
        .collect()
}
