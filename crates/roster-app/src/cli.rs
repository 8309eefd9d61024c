//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use roster_core::model::CourseLevel;

/// Browse the course catalog and export conflict-free schedules.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Cli {
    /// Catalog file (CSV or JSON array); overrides `data.catalog_path`.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Section file (CSV or JSON array); overrides `data.sections_path`.
    #[arg(long, global = true)]
    pub sections: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the catalog in priority order.
    Search {
        /// Course code, department tag, or free text.
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Only courses with this department tag.
        #[arg(long)]
        department: Option<String>,

        /// Only `lower` or `upper` division courses.
        #[arg(long)]
        level: Option<CourseLevel>,
    },

    /// Show one course with its requisites and the courses that require it.
    Course {
        /// Course code, e.g. `CSEN 169`.
        #[arg(required = true, num_args = 1..)]
        code: Vec<String>,
    },

    /// Build a schedule from section codes and write it as iCalendar.
    Export {
        /// Comma-separated section codes, in the order to add them.
        #[arg(long, value_delimiter = ',', required = true)]
        codes: Vec<String>,

        /// Output file; standard output when omitted.
        #[arg(long)]
        out: Option<PathBuf>,

        /// First day of term (YYYY-MM-DD).
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,

        /// Last day of term (YYYY-MM-DD).
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
    },
}

/// Joins multi-word positional arguments (`csen 169`).
#[must_use]
pub fn joined_words(words: &[String]) -> String {
    words.join(" ")
}
