//! Recurrence rules (RFC 5545 §3.3.10), limited to the weekly and yearly
//! shapes used by section meetings and time-zone transitions.

use std::fmt;

use chrono::{DateTime, Utc, Weekday};

use super::value::UTC_DATETIME_FORMAT;

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Yearly => "YEARLY",
        }
    }
}

/// A BYDAY entry, optionally with an ordinal (`2SU` is the second Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNum {
    pub ordinal: Option<i8>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    #[must_use]
    pub const fn nth(ordinal: i8, weekday: Weekday) -> Self {
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }
}

/// Two-letter RFC 5545 weekday code.
#[must_use]
pub const fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        f.write_str(weekday_code(self.weekday))
    }
}

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recur {
    pub freq: Frequency,
    /// Inclusive upper bound, always expressed in UTC.
    pub until: Option<DateTime<Utc>>,
    pub by_month: Vec<u8>,
    pub by_day: Vec<WeekdayNum>,
}

impl Recur {
    /// Every week on `weekday`, unbounded.
    #[must_use]
    pub fn weekly_on(weekday: Weekday) -> Self {
        Self {
            freq: Frequency::Weekly,
            until: None,
            by_month: Vec::new(),
            by_day: vec![WeekdayNum::every(weekday)],
        }
    }

    /// Every year on the `ordinal`-th `weekday` of `month`.
    #[must_use]
    pub fn yearly_on(month: u8, ordinal: i8, weekday: Weekday) -> Self {
        Self {
            freq: Frequency::Yearly,
            until: None,
            by_month: vec![month],
            by_day: vec![WeekdayNum::nth(ordinal, weekday)],
        }
    }

    /// Bounds the rule with an UNTIL date-time.
    #[must_use]
    pub fn until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }
}

impl fmt::Display for Recur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.freq.as_str())?;
        if let Some(until) = self.until {
            write!(f, ";UNTIL={}", until.format(UTC_DATETIME_FORMAT))?;
        }
        if !self.by_month.is_empty() {
            let months: Vec<String> = self.by_month.iter().map(u8::to_string).collect();
            write!(f, ";BYMONTH={}", months.join(","))?;
        }
        if !self.by_day.is_empty() {
            let days: Vec<String> = self.by_day.iter().map(WeekdayNum::to_string).collect();
            write!(f, ";BYDAY={}", days.join(","))?;
        }
        Ok(())
    }
}
