//! iCalendar property types (RFC 5545 §3.1, §3.8).

use chrono::{DateTime, NaiveDateTime, Utc};

use super::{Parameter, Recur, UtcOffset, Value};

/// An iCalendar property: name, parameters, and a typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    pub value: Value,
}

impl Property {
    fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, Value::Text(value.into()))
    }

    /// Creates a local date-time property anchored to `tzid`.
    #[must_use]
    pub fn zoned_datetime(
        name: impl Into<String>,
        tzid: impl Into<String>,
        dt: NaiveDateTime,
    ) -> Self {
        let mut prop = Self::with_value(name, Value::LocalDateTime(dt));
        prop.params.push(Parameter::tzid(tzid));
        prop
    }

    /// Creates a floating local date-time property (used inside VTIMEZONE).
    #[must_use]
    pub fn floating_datetime(name: impl Into<String>, dt: NaiveDateTime) -> Self {
        Self::with_value(name, Value::LocalDateTime(dt))
    }

    /// Creates a UTC date-time property.
    #[must_use]
    pub fn utc_datetime(name: impl Into<String>, dt: DateTime<Utc>) -> Self {
        Self::with_value(name, Value::UtcDateTime(dt))
    }

    /// Creates an RRULE property.
    #[must_use]
    pub fn rrule(rule: Recur) -> Self {
        Self::with_value(names::RRULE, Value::Recur(Box::new(rule)))
    }

    /// Creates a UTC-OFFSET property.
    #[must_use]
    pub fn utc_offset(name: impl Into<String>, offset: UtcOffset) -> Self {
        Self::with_value(name, Value::UtcOffset(offset))
    }
}

/// Property names emitted by export.
pub mod names {
    pub const CALSCALE: &str = "CALSCALE";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const SUMMARY: &str = "SUMMARY";

    pub const DTEND: &str = "DTEND";
    pub const DTSTART: &str = "DTSTART";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const UID: &str = "UID";
    pub const RRULE: &str = "RRULE";

    pub const TZID: &str = "TZID";
    pub const TZNAME: &str = "TZNAME";
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    pub const TZOFFSETTO: &str = "TZOFFSETTO";
}
