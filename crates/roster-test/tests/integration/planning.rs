use chrono::Weekday;
use roster_test::service::error::ServiceError;
use roster_test::service::meeting::{grid_blocks, section_meeting, try_parse_meeting_pattern};
use roster_test::service::schedule::{ScheduleManager, ToggleOutcome};

use super::helpers::{section, sections};

#[test_log::test]
fn fixture_patterns_parse() {
    let all = sections();
    assert_eq!(all.len(), 4);

    let web = section_meeting(&section("CSEN 169-1"));
    assert_eq!(web.weekdays.to_string(), "MWF");
    assert_eq!(web.interval(), Some((9.25, 10.0 + 20.0 / 60.0)));

    let networks = section_meeting(&section("CSEN 146-1"));
    assert_eq!(networks.weekdays.to_string(), "TR");
    assert_eq!(networks.interval(), Some((13.0, 14.75)));

    let design = section("CSEN 194-1");
    assert!(!section_meeting(&design).is_scheduled());
    assert!(matches!(
        try_parse_meeting_pattern(&design.meeting_pattern),
        Err(ServiceError::ParseFailure(_))
    ));
}

#[test_log::test]
fn build_schedule_with_conflicts() {
    let mut manager = ScheduleManager::new();
    let id = manager.active().id();

    assert_eq!(
        manager.toggle_section(id, section("CSEN 169-1")).expect("toggle"),
        ToggleOutcome::Added
    );

    let ToggleOutcome::Rejected(conflict) = manager
        .toggle_section(id, section("MATH 14-1"))
        .expect("toggle")
    else {
        panic!("MATH 14-1 overlaps CSEN 169-1 on Monday and Wednesday");
    };
    assert!(conflict.section.code.starts_with("MATH 14-1"));
    assert!(conflict.conflicts_with.code.starts_with("CSEN 169-1"));

    for code in ["CSEN 146-1", "CSEN 194-1"] {
        assert_eq!(
            manager.toggle_section(id, section(code)).expect("toggle"),
            ToggleOutcome::Added
        );
    }
    assert_eq!(manager.active().sections().len(), 3);
    assert!((manager.active().total_units() - 10.0).abs() < f32::EPSILON);

    // Dropping the web section frees the slot for calculus
    assert_eq!(
        manager.toggle_section(id, section("CSEN 169-1")).expect("toggle"),
        ToggleOutcome::Removed
    );
    assert_eq!(
        manager.toggle_section(id, section("MATH 14-1")).expect("toggle"),
        ToggleOutcome::Added
    );
}

#[test]
fn schedules_are_independent() {
    let mut manager = ScheduleManager::new();
    let first = manager.active().id();
    manager
        .toggle_section(first, section("CSEN 169-1"))
        .expect("toggle");

    let second = manager.create_schedule("Alternative");
    assert_eq!(
        manager.toggle_section(second, section("MATH 14-1")).expect("toggle"),
        ToggleOutcome::Added
    );

    let web_code = section("CSEN 169-1").code;
    let math_code = section("MATH 14-1").code;
    assert_eq!(manager.schedules_containing(&web_code), vec![first]);
    assert_eq!(manager.schedules_containing(&math_code), vec![second]);

    manager.delete_schedule(second).expect("delete");
    assert_eq!(manager.active().id(), first);
    assert!(matches!(
        manager.delete_schedule(first),
        Err(ServiceError::InvalidOperation(_))
    ));
    assert_eq!(manager.snapshot().schedules().len(), 1);
}

#[test]
fn weekly_grid() {
    let chosen = [section("CSEN 169-1"), section("CSEN 146-1"), section("CSEN 194-1")];
    let blocks = grid_blocks(&chosen);
    assert_eq!(blocks.len(), 5);

    let thursday: Vec<_> = blocks
        .iter()
        .filter(|(_, block)| block.weekday == Weekday::Thu)
        .collect();
    assert_eq!(thursday.len(), 1);
    assert!(thursday[0].0.code.starts_with("CSEN 146-1"));
}
