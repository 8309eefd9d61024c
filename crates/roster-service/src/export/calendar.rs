//! Recurring-event iCalendar export.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use uuid::Uuid;

use roster_core::constants::{DEFAULT_PRODID, EVENT_UID_NAMESPACE};
use roster_core::model::{Section, Term};
use roster_rfc::rfc::ical::build::serialize;
use roster_rfc::rfc::ical::core::{Component, ICalendar, Property, Recur, names, weekday_code};
use roster_rfc::rfc::ical::timezone::{CALENDAR_TZID, calendar_vtimezone, local_to_utc};

use crate::error::ServiceResult;
use crate::meeting::{MeetingSpec, section_meeting};
use crate::schedule::Schedule;

/// Domain used in event UIDs.
const UID_DOMAIN: &str = "roster";

/// Builds a calendar document from scheduled sections.
///
/// Each (section, weekday) pair becomes one weekly recurring VEVENT that starts
/// on the first matching date of the term and repeats until the term ends.
/// The exporter is pure: the `DTSTAMP` is fixed at construction.
#[derive(Debug, Clone)]
pub struct CalendarExporter {
    prodid: String,
    stamp: DateTime<Utc>,
}

impl CalendarExporter {
    #[must_use]
    pub fn new(stamp: DateTime<Utc>) -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            stamp,
        }
    }

    #[must_use]
    pub fn with_prodid(mut self, prodid: impl Into<String>) -> Self {
        self.prodid = prodid.into();
        self
    }

    /// ## Summary
    /// Exports a schedule over the term `[term_start, term_end]`.
    ///
    /// ## Errors
    /// Returns an error if `term_end` precedes `term_start`.
    pub fn export(
        &self,
        schedule: &Schedule,
        term_start: NaiveDate,
        term_end: NaiveDate,
    ) -> ServiceResult<String> {
        let term = Term::new(term_start, term_end)?;
        self.export_sections(schedule.sections(), &term)
    }

    /// ## Summary
    /// Exports arbitrary sections over a term and serializes the document.
    ///
    /// ## Errors
    /// Returns an error if the end-of-term instant cannot be placed in the
    /// calendar zone.
    pub fn export_sections(&self, sections: &[Section], term: &Term) -> ServiceResult<String> {
        Ok(serialize(&self.build(sections, term)?))
    }

    /// ## Summary
    /// Builds the calendar document without serializing it.
    ///
    /// ## Errors
    /// Returns an error if the end-of-term instant cannot be placed in the
    /// calendar zone.
    pub fn build(&self, sections: &[Section], term: &Term) -> ServiceResult<ICalendar> {
        let until = term_until(term)?;

        let mut calendar = ICalendar::new(self.prodid.as_str());
        calendar.add_timezone(calendar_vtimezone());

        for section in sections {
            let meeting = section_meeting(section);
            let Some((start, end)) = meeting_times(&meeting) else {
                tracing::debug!(section = %section.code, "no fixed meeting time, skipping");
                continue;
            };

            for weekday in meeting.weekdays.iter() {
                let first = first_on_or_after(term.start, weekday);
                if first > term.end {
                    tracing::debug!(section = %section.code, %weekday, "no meeting inside term");
                    continue;
                }
                calendar.add_event(self.event(
                    section,
                    weekday,
                    first.and_time(start),
                    first.and_time(end),
                    until,
                ));
            }
        }

        tracing::debug!(events = calendar.events().len(), "calendar built");
        Ok(calendar)
    }

    fn event(
        &self,
        section: &Section,
        weekday: Weekday,
        start: NaiveDateTime,
        end: NaiveDateTime,
        until: DateTime<Utc>,
    ) -> Component {
        let mut event = Component::event()
            .with_property(Property::text(names::UID, event_uid(&section.code, weekday)))
            .with_property(Property::utc_datetime(names::DTSTAMP, self.stamp))
            .with_property(Property::zoned_datetime(names::DTSTART, CALENDAR_TZID, start))
            .with_property(Property::zoned_datetime(names::DTEND, CALENDAR_TZID, end))
            .with_property(Property::rrule(Recur::weekly_on(weekday).until(until)))
            .with_property(Property::text(names::SUMMARY, section.code.as_str()));

        let description = describe(section);
        if !description.is_empty() {
            event.add_property(Property::text(names::DESCRIPTION, description));
        }
        if !section.location.is_empty() {
            event.add_property(Property::text(names::LOCATION, section.location.as_str()));
        }
        event
    }
}

/// `UNTIL`: local midnight after the last day of term, in UTC.
fn term_until(term: &Term) -> ServiceResult<DateTime<Utc>> {
    let day_after = term.end + Days::new(1);
    Ok(local_to_utc(day_after.and_time(NaiveTime::MIN))?)
}

fn meeting_times(meeting: &MeetingSpec) -> Option<(NaiveTime, NaiveTime)> {
    if meeting.weekdays.is_empty() {
        return None;
    }
    let (start, end) = meeting.interval()?;
    Some((clock_time(start)?, clock_time(end)?))
}

/// Fractional hours to a wall-clock time, rounded to the minute.
fn clock_time(hours: f64) -> Option<NaiveTime> {
    let minutes = (hours * 60.0).round();
    if !(0.0..24.0 * 60.0).contains(&minutes) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range checked above"
    )]
    let minutes = minutes as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

fn first_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date + Days::new(u64::from(ahead))
}

/// Stable across exports so re-imports update rather than duplicate events.
fn event_uid(code: &str, weekday: Weekday) -> String {
    let name = format!("{code}/{}", weekday_code(weekday));
    let uuid = Uuid::new_v5(&EVENT_UID_NAMESPACE, name.as_bytes());
    format!("{uuid}@{UID_DOMAIN}")
}

fn describe(section: &Section) -> String {
    let mut lines = Vec::new();
    if !section.instructor.is_empty() {
        lines.push(format!("Instructor: {}", section.instructor));
    }
    if !section.tags.is_empty() {
        lines.push(format!("Tags: {}", section.tags.join(", ")));
    }
    if let Some(units) = section.units {
        lines.push(format!("Units: {units}"));
    }
    lines.join("\n")
}
