//! Time-range extraction.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::time::parse_time;

/// A parsed `[start, end)` range and where it began in the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
    /// Byte offset of the range within the scanned text.
    pub offset: usize,
}

struct RangeStrategy {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    resolve: fn(&Captures<'_>) -> Option<(f64, f64)>,
}

/// `9:15 AM - 10:20 AM`
static MERIDIEM_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}(?::\d{2})?\s*[ap]\.?\s*m\b\.?)\s*[-–—]\s*(\d{1,2}(?::\d{2})?\s*[ap]\.?\s*m\b\.?)",
    )
    .expect("meridiem range pattern is valid")
});

/// `9:15 - 10:20 AM`
static SHARED_MERIDIEM_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}(?::\d{2})?)\s*[-–—]\s*(\d{1,2}(?::\d{2})?\s*([ap])\.?\s*m\b\.?)")
        .expect("shared meridiem range pattern is valid")
});

/// `13:30 - 14:45`
static CLOCK_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2}:\d{2})\s*[-–—]\s*(\d{1,2}:\d{2})\b")
        .expect("24-hour range pattern is valid")
});

/// Tried in order; the first strategy whose match resolves to a valid range
/// wins.
static RANGE_STRATEGIES: &[RangeStrategy] = &[
    RangeStrategy {
        name: "explicit-meridiem",
        pattern: &MERIDIEM_RANGE,
        resolve: explicit_meridiem,
    },
    RangeStrategy {
        name: "shared-meridiem",
        pattern: &SHARED_MERIDIEM_RANGE,
        resolve: shared_meridiem,
    },
    RangeStrategy {
        name: "24-hour",
        pattern: &CLOCK_RANGE,
        resolve: explicit_meridiem,
    },
];

/// ## Summary
/// Finds the first time range in `text`.
///
/// Returns `None` when no strategy yields a range with `start < end`.
#[must_use]
pub fn find_time_range(text: &str) -> Option<TimeRange> {
    RANGE_STRATEGIES.iter().find_map(|strategy| {
        strategy.pattern.captures_iter(text).find_map(|caps| {
            let (start, end) = (strategy.resolve)(&caps)?;
            if start >= end {
                tracing::trace!(strategy = strategy.name, start, end, "inverted range ignored");
                return None;
            }
            let offset = caps.get(0)?.start();
            tracing::trace!(strategy = strategy.name, start, end, "parsed time range");
            Some(TimeRange { start, end, offset })
        })
    })
}

fn explicit_meridiem(caps: &Captures<'_>) -> Option<(f64, f64)> {
    Some((parse_time(&caps[1])?, parse_time(&caps[2])?))
}

/// The start inherits the end's meridiem, falling back to AM when that would
/// invert the range (`11:00 - 12:15 PM`).
fn shared_meridiem(caps: &Captures<'_>) -> Option<(f64, f64)> {
    let end = parse_time(&caps[2])?;
    let meridiem = &caps[3];
    let start = parse_time(&format!("{} {meridiem}m", &caps[1]))?;
    if start < end {
        return Some((start, end));
    }
    Some((parse_time(&format!("{} am", &caps[1]))?, end))
}
