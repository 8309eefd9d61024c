use chrono::{DateTime, TimeZone, Utc};
use roster_test::core::model::Section;
use roster_test::fixtures::section_rows;

/// Sections from the JSON fixture, blank codes dropped.
pub fn sections() -> Vec<Section> {
    roster_test::app::loader::sections_from_rows(&section_rows())
}

/// The section whose code starts with `prefix`.
pub fn section(prefix: &str) -> Section {
    sections()
        .into_iter()
        .find(|s| s.code.starts_with(prefix))
        .unwrap_or_else(|| panic!("fixture has no section {prefix}"))
}

pub fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 18, 30, 0)
        .single()
        .expect("valid stamp")
}

/// Undoes RFC 5545 line folding.
pub fn unfold(ics: &str) -> String {
    ics.replace("\r\n ", "")
}

/// `(DTSTART line, RRULE line)` for every VEVENT.
pub fn event_rules(ics: &str) -> Vec<(String, String)> {
    let unfolded = unfold(ics);
    unfolded
        .split("BEGIN:VEVENT\r\n")
        .skip(1)
        .map(|event| {
            let line = |prefix: &str| {
                event
                    .split("\r\n")
                    .find(|l| l.starts_with(prefix))
                    .unwrap_or_else(|| panic!("event without {prefix}"))
                    .to_string()
            };
            (line("DTSTART"), line("RRULE"))
        })
        .collect()
}
