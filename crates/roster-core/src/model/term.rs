//! Academic terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SectionRow;
use crate::constants::{FALLBACK_TERM_END, FALLBACK_TERM_START};
use crate::error::{CoreError, CoreResult};

/// Formats seen in registrar exports, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%b %d, %Y"];

/// The inclusive date range over which weekly meetings repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Term {
    /// ## Summary
    /// Creates a term from inclusive bounds.
    ///
    /// ## Errors
    /// Returns `ValidationError` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::ValidationError(format!(
                "term ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// The compiled-in fallback term.
    #[must_use]
    pub fn fallback() -> Self {
        let start = parse_date(FALLBACK_TERM_START);
        let end = parse_date(FALLBACK_TERM_END);
        match (start, end) {
            (Some(start), Some(end)) => Self { start, end },
            _ => Self {
                start: NaiveDate::MIN,
                end: NaiveDate::MIN,
            },
        }
    }

    /// ## Summary
    /// Derives a term from the first section row carrying both dates.
    ///
    /// Returns `None` when no row has a parseable, ordered pair.
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a SectionRow>) -> Option<Self> {
        let term = rows.into_iter().find_map(|row| {
            let start = parse_date(row.start_date.as_deref()?)?;
            let end = parse_date(row.end_date.as_deref()?)?;
            Self::new(start, end).ok()
        });
        match &term {
            Some(term) => {
                tracing::debug!(start = %term.start, end = %term.end, "term derived from section rows");
            }
            None => tracing::debug!("no section row carries term dates"),
        }
        term
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses a date in any of the registrar export formats.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn fallback_pair() {
        let term = Term::fallback();
        assert_eq!(term.start, date(2025, 1, 6));
        assert_eq!(term.end, date(2025, 3, 21));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(Term::new(date(2025, 3, 1), date(2025, 2, 1)).is_err());
        assert!(Term::new(date(2025, 3, 1), date(2025, 3, 1)).is_ok());
    }

    #[test]
    fn from_rows_uses_first_dated_row() {
        let rows = [
            SectionRow::default(),
            SectionRow {
                start_date: Some("09/22/2025".to_string()),
                end_date: Some("12/05/2025".to_string()),
                ..SectionRow::default()
            },
            SectionRow {
                start_date: Some("2026-01-05".to_string()),
                end_date: Some("2026-03-20".to_string()),
                ..SectionRow::default()
            },
        ];
        let term = Term::from_rows(&rows).expect("term");
        assert_eq!(term.start, date(2025, 9, 22));
        assert_eq!(term.end, date(2025, 12, 5));
        assert!(term.contains(date(2025, 10, 1)));
        assert!(!term.contains(date(2025, 12, 6)));
    }

    #[test]
    fn from_rows_without_dates() {
        assert_eq!(Term::from_rows(&[SectionRow::default()]), None);
    }
}
