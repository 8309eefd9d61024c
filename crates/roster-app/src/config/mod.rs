//! Settings as the commands see them: file paths with CLI overrides, and the
//! term an export covers.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roster_core::config::Settings;
use roster_core::model::{SectionRow, Term};

use crate::cli::Cli;
use crate::error::AppResult;

/// ## Summary
/// Catalog file: `--catalog`, else `data.catalog_path`.
#[must_use]
pub fn catalog_path(cli: &Cli, settings: &Settings) -> PathBuf {
    cli.catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.data.catalog_path))
}

/// ## Summary
/// Section file: `--sections`, else `data.sections_path`.
#[must_use]
pub fn sections_path(cli: &Cli, settings: &Settings) -> PathBuf {
    cli.sections
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.data.sections_path))
}

/// Where a resolved term came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSource {
    Arguments,
    SectionRows,
    Settings,
}

/// ## Summary
/// Picks the export term: explicit bounds first, then the first section row
/// with "Start Date"/"End Date", then the configured fallback.
///
/// ## Errors
/// Returns an error if explicit bounds are inverted or the configured
/// fallback is malformed.
pub fn resolve_term(
    bounds: Option<(NaiveDate, NaiveDate)>,
    rows: &[SectionRow],
    settings: &Settings,
) -> AppResult<(Term, TermSource)> {
    if let Some((start, end)) = bounds {
        return Ok((Term::new(start, end)?, TermSource::Arguments));
    }
    if let Some(term) = Term::from_rows(rows) {
        return Ok((term, TermSource::SectionRows));
    }
    Ok((settings.term.term()?, TermSource::Settings))
}

/// Writes `contents` to `path`, logging the destination.
///
/// ## Errors
/// Returns an error if the file cannot be written.
pub fn write_output(path: &Path, contents: &str) -> AppResult<()> {
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings() -> Settings {
        Settings::defaults().expect("defaults load")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn arguments_win() {
        let rows = [SectionRow {
            start_date: Some("2025-04-01".to_string()),
            end_date: Some("2025-06-13".to_string()),
            ..SectionRow::default()
        }];
        let (term, source) =
            resolve_term(Some((date(2025, 9, 22), date(2025, 12, 5))), &rows, &settings())
                .expect("term");
        assert_eq!(source, TermSource::Arguments);
        assert_eq!(term.start, date(2025, 9, 22));
    }

    #[test]
    fn rows_then_fallback() {
        let rows = [SectionRow {
            start_date: Some("04/01/2025".to_string()),
            end_date: Some("06/13/2025".to_string()),
            ..SectionRow::default()
        }];
        let (term, source) = resolve_term(None, &rows, &settings()).expect("term");
        assert_eq!(source, TermSource::SectionRows);
        assert_eq!(term.end, date(2025, 6, 13));

        let (term, source) = resolve_term(None, &[], &settings()).expect("term");
        assert_eq!(source, TermSource::Settings);
        assert_eq!(term, Term::fallback());
    }

    #[test]
    fn inverted_arguments_fail() {
        assert!(resolve_term(Some((date(2025, 3, 1), date(2025, 1, 1))), &[], &settings()).is_err());
    }

    #[test]
    fn cli_overrides_paths() {
        let settings = settings();
        let cli = Cli::try_parse_from(["roster", "--catalog", "cat.json", "search", "web"])
            .expect("valid arguments");
        assert_eq!(catalog_path(&cli, &settings), PathBuf::from("cat.json"));
        assert_eq!(sections_path(&cli, &settings), PathBuf::from("sections.csv"));
    }
}
