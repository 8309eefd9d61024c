//! The fixed time zone used by calendar export.
//!
//! Every meeting time is interpreted as local time in US Pacific time. The
//! VTIMEZONE block carries the current US transition rules (second Sunday in
//! March, first Sunday in November) so clients without a zone database still
//! render events correctly.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use super::core::{Component, ComponentKind, Property, Recur, UtcOffset, names};
use crate::error::{RfcError, RfcResult};

/// The zone every exported event is anchored to.
pub const CALENDAR_TZ: Tz = chrono_tz::America::Los_Angeles;

/// TZID written on DTSTART/DTEND and the VTIMEZONE block.
pub const CALENDAR_TZID: &str = roster_core::constants::CALENDAR_TZID;

const STANDARD_OFFSET: UtcOffset = UtcOffset::hours(-8);
const DAYLIGHT_OFFSET: UtcOffset = UtcOffset::hours(-7);

/// ## Summary
/// Builds the VTIMEZONE component for [`CALENDAR_TZID`].
#[must_use]
pub fn calendar_vtimezone() -> Component {
    let mut tz = Component::timezone();
    tz.add_property(Property::text(names::TZID, CALENDAR_TZID));

    tz.add_child(transition(
        ComponentKind::Daylight,
        "PDT",
        (STANDARD_OFFSET, DAYLIGHT_OFFSET),
        3,
        2,
        Weekday::Sun,
    ));
    tz.add_child(transition(
        ComponentKind::Standard,
        "PST",
        (DAYLIGHT_OFFSET, STANDARD_OFFSET),
        11,
        1,
        Weekday::Sun,
    ));
    tz
}

/// One STANDARD or DAYLIGHT sub-component. Transitions happen at 02:00 local
/// on the `ordinal`-th `weekday` of `month`, starting from the 1970 epoch
/// occurrence.
fn transition(
    kind: ComponentKind,
    tzname: &str,
    (from, to): (UtcOffset, UtcOffset),
    month: u8,
    ordinal: u8,
    weekday: Weekday,
) -> Component {
    let mut component = Component::new(kind);
    if let Some(onset) = NaiveDate::from_weekday_of_month_opt(1970, u32::from(month), weekday, ordinal)
        .and_then(|d| d.and_hms_opt(2, 0, 0))
    {
        component.add_property(Property::floating_datetime(names::DTSTART, onset));
    }
    component.add_property(Property::utc_offset(names::TZOFFSETFROM, from));
    component.add_property(Property::utc_offset(names::TZOFFSETTO, to));
    #[expect(clippy::cast_possible_wrap, reason = "ordinal is 1-5")]
    let ordinal = ordinal as i8;
    component.add_property(Property::rrule(Recur::yearly_on(month, ordinal, weekday)));
    component.add_property(Property::text(names::TZNAME, tzname));
    component
}

/// ## Summary
/// Converts a local wall-clock time in the calendar zone to UTC.
///
/// Ambiguous times (the repeated hour in November) resolve to the earlier
/// instant.
///
/// ## Errors
/// Returns `NonExistentTime` for wall-clock times skipped by the spring
/// transition.
pub fn local_to_utc(local: NaiveDateTime) -> RfcResult<DateTime<Utc>> {
    match CALENDAR_TZ.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => {
            tracing::trace!(%local, "ambiguous local time, using earlier offset");
            Ok(earliest.with_timezone(&Utc))
        }
        LocalResult::None => Err(RfcError::NonExistentTime(local.to_string())),
    }
}
