//! Course catalog: indexing, search, and requisite text.

mod dependents;
mod index;
mod requisite;
mod search;

pub use index::{Catalog, CourseFilter, DepartmentStat, strip_requisite_clause};
pub use requisite::{
    Requisites, has_corequisites, normalize_requisite, referenced_codes, split_requisites,
};
pub use search::{CourseCode, search_courses};
