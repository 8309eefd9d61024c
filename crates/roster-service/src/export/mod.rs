//! Schedule export.

mod calendar;

pub use calendar::CalendarExporter;
