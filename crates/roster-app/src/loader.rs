//! Reading catalog and section rows from CSV or JSON files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use roster_core::model::{CatalogRow, Section, SectionRow};
use roster_service::catalog::Catalog;

use crate::error::AppResult;

/// Row file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    /// Header row plus records.
    Csv,
    /// A JSON array of objects.
    Json,
}

impl RowFormat {
    /// JSON for `.json` files, CSV otherwise.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(std::ffi::OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// ## Summary
/// Deserializes every row from `reader`.
///
/// ## Errors
/// Returns an error if the input is not valid CSV/JSON for `T`.
pub fn read_rows<T: DeserializeOwned>(reader: impl Read, format: RowFormat) -> AppResult<Vec<T>> {
    match format {
        RowFormat::Json => Ok(serde_json::from_reader(reader)?),
        RowFormat::Csv => {
            let mut csv = csv::ReaderBuilder::new()
                .flexible(true)
                .trim(csv::Trim::Headers)
                .from_reader(reader);
            csv.deserialize()
                .collect::<Result<Vec<T>, _>>()
                .map_err(Into::into)
        }
    }
}

/// ## Summary
/// Reads rows from a file, picking the format from its extension.
///
/// ## Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let file = File::open(path)?;
    let rows = read_rows(BufReader::new(file), RowFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "rows loaded");
    Ok(rows)
}

/// ## Summary
/// Loads and indexes a catalog file.
///
/// ## Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    Ok(Catalog::from_rows(load_rows::<CatalogRow>(path)?))
}

/// Converts section rows, dropping rows without a section code.
#[must_use]
pub fn sections_from_rows(rows: &[SectionRow]) -> Vec<Section> {
    let sections: Vec<Section> = rows.iter().filter_map(Section::from_row).collect();
    if sections.len() < rows.len() {
        tracing::debug!(dropped = rows.len() - sections.len(), "rows without a section code");
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_CSV: &str = "\
tag,number,course,description,pre_reqs
CSEN,10,Introduction to Programming,Variables and loops.,
CSEN,169,Web Infrastructure,\"HTTP, caching. Prerequisite: CSEN 146.\",CSEN 146.
,999,Orphan,No tag,
";

    const SECTIONS_JSON: &str = r#"[
        {"Course Section": "CSEN 169-1", "Units": "4", "Meeting Patterns": "M W F | 9:15 AM - 10:20 AM"},
        {"Course Section": "", "Units": "4"}
    ]"#;

    #[test]
    fn format_from_extension() {
        assert_eq!(RowFormat::from_path(Path::new("rows.JSON")), RowFormat::Json);
        assert_eq!(RowFormat::from_path(Path::new("rows.csv")), RowFormat::Csv);
        assert_eq!(RowFormat::from_path(Path::new("rows")), RowFormat::Csv);
    }

    #[test_log::test]
    fn catalog_rows_from_csv() {
        let rows: Vec<CatalogRow> =
            read_rows(CATALOG_CSV.as_bytes(), RowFormat::Csv).expect("valid csv");
        assert_eq!(rows.len(), 3);

        let catalog = Catalog::from_rows(rows);
        assert_eq!(catalog.len(), 2);
        let web = catalog.get("CSEN169").expect("indexed");
        assert_eq!(web.description, "HTTP, caching.");
        assert_eq!(web.prerequisites, "CSEN 146.");
    }

    #[test]
    fn section_rows_from_json() {
        let rows: Vec<SectionRow> =
            read_rows(SECTIONS_JSON.as_bytes(), RowFormat::Json).expect("valid json");
        let sections = sections_from_rows(&rows);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].code, "CSEN 169-1");
        assert_eq!(sections[0].units, Some(4.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result: AppResult<Vec<SectionRow>> = read_rows("{".as_bytes(), RowFormat::Json);
        assert!(result.is_err());
    }
}
