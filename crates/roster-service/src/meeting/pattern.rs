//! Whole meeting patterns.

use roster_core::model::WeekdaySet;

use super::days::try_parse_days;
use super::range::{TimeRange, find_time_range};
use super::MeetingSpec;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Parses a free-text meeting pattern.
///
/// With a `|` separator the left side is the day list and the right side the
/// time range. Otherwise the first time range is located and the day tokens
/// before it are read. Non-day labels before or after the day list are
/// skipped.
///
/// Never fails: missing days leave the weekday set empty and missing times
/// leave `start`/`end` absent.
#[must_use]
pub fn parse_meeting_pattern(text: &str) -> MeetingSpec {
    let spec = scan(text);
    if !spec.is_scheduled() {
        tracing::debug!(pattern = text, "meeting pattern has no fixed weekly time");
    }
    spec
}

/// ## Summary
/// Parses a meeting pattern, reporting why it has no fixed weekly time.
///
/// ## Errors
/// Returns `ParseFailure` when the pattern lacks weekdays or a time range.
pub fn try_parse_meeting_pattern(text: &str) -> ServiceResult<MeetingSpec> {
    let spec = scan(text);
    if spec.weekdays.is_empty() {
        return Err(ServiceError::ParseFailure(format!(
            "no meeting days in {text:?}"
        )));
    }
    if spec.interval().is_none() {
        return Err(ServiceError::ParseFailure(format!(
            "no time range in {text:?}"
        )));
    }
    Ok(spec)
}

fn scan(text: &str) -> MeetingSpec {
    let text = text.trim();
    let (weekdays, range) = match text.split_once('|') {
        Some((day_text, time_text)) => (day_run(day_text), find_time_range(time_text)),
        None => {
            let range = find_time_range(text);
            let day_text = range.map_or(text, |r| &text[..r.offset]);
            (day_run(day_text), range)
        }
    };
    spec_from(weekdays, range)
}

/// The day list within `text`: the longest run of tokens at the end, so labels
/// like `"Lecture M W F"` still yield `MWF`, or failing that the longest run at
/// the start, so `"M W F Lab"` does too.
fn day_run(text: &str) -> WeekdaySet {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    (0..tokens.len())
        .find_map(|first| try_parse_days(&tokens[first..].join(" ")))
        .or_else(|| {
            (1..tokens.len())
                .rev()
                .find_map(|last| try_parse_days(&tokens[..last].join(" ")))
        })
        .unwrap_or_default()
}

fn spec_from(weekdays: WeekdaySet, range: Option<TimeRange>) -> MeetingSpec {
    MeetingSpec {
        weekdays,
        start: range.map(|r| r.start),
        end: range.map(|r| r.end),
    }
}
