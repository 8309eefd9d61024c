//! Command dispatch.

mod course;
mod export;
mod search;

use std::io::Write;

use chrono::Utc;
use roster_core::config::Settings;
use roster_core::model::SectionRow;
use roster_service::catalog::CourseFilter;
use roster_service::export::CalendarExporter;

use crate::cli::{Cli, Command, joined_words};
use crate::config::{catalog_path, resolve_term, sections_path, write_output};
use crate::error::AppResult;
use crate::loader::{load_catalog, load_rows};

pub use course::describe_course;
pub use export::{ExportPlan, PlannedSection, plan_schedule};
pub use search::print_results;

/// ## Summary
/// Runs one command, writing user-facing output to `out`.
///
/// ## Errors
/// Returns an error if input files cannot be loaded, a course is unknown, or
/// output cannot be written.
pub fn run(cli: &Cli, settings: &Settings, out: &mut impl Write) -> AppResult<()> {
    match &cli.command {
        Command::Search {
            query,
            department,
            level,
        } => {
            let catalog = load_catalog(&catalog_path(cli, settings))?;
            let filter = CourseFilter {
                department: department.clone(),
                level: *level,
            };
            let results = catalog.search(&joined_words(query), &filter);
            print_results(&results, out)
        }
        Command::Course { code } => {
            let catalog = load_catalog(&catalog_path(cli, settings))?;
            describe_course(&catalog, &joined_words(code), out)
        }
        Command::Export {
            codes,
            out: path,
            start,
            end,
        } => {
            let rows: Vec<SectionRow> = load_rows(&sections_path(cli, settings))?;
            let (term, source) = resolve_term(start.zip(*end), &rows, settings)?;
            tracing::debug!(start = %term.start, end = %term.end, ?source, "term resolved");

            let plan = plan_schedule(&rows, codes)?;
            if path.is_some() {
                plan.report(out)?;
            } else {
                plan.report(&mut std::io::stderr().lock())?;
            }

            let calendar = CalendarExporter::new(Utc::now())
                .with_prodid(settings.calendar.prodid.as_str())
                .export_sections(plan.manager.active().sections(), &term)?;

            match path {
                Some(path) => write_output(path, &calendar),
                None => Ok(out.write_all(calendar.as_bytes())?),
            }
        }
    }
}
