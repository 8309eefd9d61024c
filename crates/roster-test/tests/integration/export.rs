use rrule::RRuleSet;
use roster_test::core::model::Term;
use roster_test::fixtures::section_rows;
use roster_test::service::export::CalendarExporter;
use roster_test::service::schedule::ScheduleManager;

use super::helpers::{event_rules, section, stamp, unfold};

fn term() -> Term {
    Term::from_rows(&section_rows()).expect("fixture rows carry term dates")
}

fn exported(codes: &[&str]) -> String {
    let mut manager = ScheduleManager::new();
    let id = manager.active().id();
    for code in codes {
        manager.toggle_section(id, section(code)).expect("toggle");
    }
    let term = term();
    CalendarExporter::new(stamp())
        .export(manager.active(), term.start, term.end)
        .expect("export")
}

#[test]
fn term_comes_from_rows() {
    let term = term();
    assert_eq!(term.start.to_string(), "2025-01-06");
    assert_eq!(term.end.to_string(), "2025-01-17");
}

#[test_log::test]
fn document_shape() {
    let ics = exported(&["CSEN 169-1", "CSEN 146-1", "CSEN 194-1"]);

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VTIMEZONE").count(), 1);
    assert_eq!(ics.matches("BEGIN:STANDARD").count(), 1);
    assert_eq!(ics.matches("BEGIN:DAYLIGHT").count(), 1);
    // MWF + TR; the TBA section is skipped
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5);
    assert!(ics.find("BEGIN:VTIMEZONE") < ics.find("BEGIN:VEVENT"));

    assert!(ics.split("\r\n").all(|line| line.len() <= 75));
    assert!(!ics.replace("\r\n", "").contains('\n'));

    let unfolded = unfold(&ics);
    assert!(unfolded.contains("LOCATION:Heafey\\, Room 101\r\n"));
    assert!(unfolded.contains("DTSTAMP:20250102T183000Z\r\n"));
    assert!(!unfolded.contains("CSEN 194-1"));
}

#[test]
fn every_rule_stops_after_term() {
    let ics = exported(&["CSEN 169-1", "CSEN 146-1"]);
    let rules = event_rules(&ics);
    assert_eq!(rules.len(), 5);

    let mut occurrences = 0;
    for (dtstart, rrule) in &rules {
        assert!(dtstart.starts_with("DTSTART;TZID=America/Los_Angeles:202501"));
        assert!(rrule.starts_with("RRULE:FREQ=WEEKLY;UNTIL=20250118T080000Z;BYDAY="));

        let set: RRuleSet = format!("{dtstart}\n{rrule}").parse().expect("rrule set parses");
        let dates = set.all(50).dates;
        // Two full weeks: each weekday meets twice
        assert_eq!(dates.len(), 2, "{dtstart} {rrule}");
        occurrences += dates.len();
    }
    assert_eq!(occurrences, 10);
}

#[test]
fn uids_are_stable_across_exports() {
    let first = exported(&["CSEN 169-1"]);
    let second = exported(&["CSEN 169-1"]);
    let uids = |ics: &str| -> Vec<String> {
        ics.split("\r\n")
            .filter(|l| l.starts_with("UID:"))
            .map(String::from)
            .collect()
    };
    assert_eq!(uids(&first).len(), 3);
    assert_eq!(uids(&first), uids(&second));
}
