use std::path::PathBuf;

use clap::Parser;
use roster_test::app::cli::Cli;
use roster_test::app::command::run;
use roster_test::core::config::Settings;
use roster_test::fixtures::{CATALOG_CSV, SECTIONS_JSON};

/// A scratch directory holding the fixture files.
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("roster-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        std::fs::write(dir.join("courses.csv"), CATALOG_CSV).expect("write catalog");
        std::fs::write(dir.join("sections.json"), SECTIONS_JSON).expect("write sections");
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.join(name).display().to_string()
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let catalog = self.path("courses.csv");
        let sections = self.path("sections.json");
        let mut argv = vec![
            "roster",
            "--catalog",
            catalog.as_str(),
            "--sections",
            sections.as_str(),
        ];
        argv.extend_from_slice(args);

        let cli = Cli::try_parse_from(argv)?;
        let settings = Settings::defaults()?;
        let mut out = Vec::new();
        run(&cli, &settings, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

#[test_log::test]
fn search_command() {
    let ws = Workspace::new();
    let out = ws.run(&["search", "csen", "169"]).expect("search runs");
    assert_eq!(out, "CSEN 169 - Web Infrastructure\n");

    let out = ws
        .run(&["search", "--department", "MATH", "calculus"])
        .expect("search runs");
    assert_eq!(out, "MATH 14 - Calculus IV\n");
}

#[test]
fn course_command() {
    let ws = Workspace::new();
    let out = ws.run(&["course", "CSEN", "146"]).expect("course runs");
    assert!(out.starts_with("CSEN 146 - Computer Networks\n"));
    assert!(out.contains("Prerequisites: CSEN 12\n"));
    assert!(out.contains("Corequisites: CSEN 146L\n"));
    assert!(out.contains("Required for:\n  CSEN 169 - Web Infrastructure\n"));

    assert!(ws.run(&["course", "PHYS", "31"]).is_err());
}

#[test_log::test]
fn export_command_writes_file() {
    let ws = Workspace::new();
    let target = ws.path("plan.ics");
    let out = ws
        .run(&[
            "export",
            "--codes",
            "CSEN 169-1,MATH 14-1,CSEN 146-1",
            "--out",
            target.as_str(),
        ])
        .expect("export runs");

    assert_eq!(
        out,
        "added CSEN 169-1 - Web Infrastructure\n\
         skipped MATH 14-1 - Calculus IV conflicts with CSEN 169-1 - Web Infrastructure\n\
         added CSEN 146-1 - Computer Networks\n"
    );

    let ics = std::fs::read_to_string(&target).expect("calendar written");
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5);
    assert!(ics.contains("UNTIL=20250118T080000Z"));
}

#[test]
fn export_command_honours_term_arguments() {
    let ws = Workspace::new();
    let out = ws
        .run(&[
            "export",
            "--codes",
            "CSEN 146-1",
            "--start",
            "2025-03-31",
            "--end",
            "2025-06-06",
        ])
        .expect("export runs");

    assert!(out.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(out.contains("DTSTART;TZID=America/Los_Angeles:20250401T130000\r\n"));
    // Midnight after June 6 in daylight time
    assert!(out.contains("UNTIL=20250607T070000Z"));
}
