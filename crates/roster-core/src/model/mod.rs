//! Domain model shared across the workspace.
//!
//! These types carry no parsing logic beyond field normalization; meeting
//! patterns, requisite text, and search live in `roster-service`.

mod course;
mod row;
mod section;
mod term;
mod weekday;

pub use course::{Course, CourseLevel};
pub use row::{CatalogRow, SectionRow};
pub use section::Section;
pub use term::{Term, parse_date};
pub use weekday::WeekdaySet;
