//! iCalendar value types (RFC 5545 §3.3).

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::Recur;

/// Local `DATE-TIME` in basic format (`20250106T091500`).
pub const LOCAL_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";
/// UTC `DATE-TIME` in basic format (`20250322T070000Z`).
pub const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// UTC offset representation (e.g., -0800).
///
/// Stored as total seconds from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// Creates a whole-hour offset.
    #[must_use]
    pub const fn hours(hours: i32) -> Self {
        Self {
            seconds: hours * 3600,
        }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds >= 0 { '+' } else { '-' };
        let hours = self.seconds.abs() / 3600;
        let minutes = (self.seconds.abs() % 3600) / 60;
        write!(f, "{sign}{hours:02}{minutes:02}")
    }
}

/// Property values produced by export.
///
/// Text is stored unescaped; escaping happens at serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// TEXT value (unescaped).
    Text(String),
    /// DATE-TIME without a `Z`; anchored by a TZID parameter or floating.
    LocalDateTime(NaiveDateTime),
    /// DATE-TIME in UTC.
    UtcDateTime(DateTime<Utc>),
    /// RECUR value (recurrence rule).
    Recur(Box<Recur>),
    /// UTC-OFFSET value.
    UtcOffset(UtcOffset),
}

/// Non-text values in their RFC 5545 lexical form. Text is returned as-is.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::LocalDateTime(dt) => write!(f, "{}", dt.format(LOCAL_DATETIME_FORMAT)),
            Self::UtcDateTime(dt) => write!(f, "{}", dt.format(UTC_DATETIME_FORMAT)),
            Self::Recur(r) => write!(f, "{r}"),
            Self::UtcOffset(o) => write!(f, "{o}"),
        }
    }
}
