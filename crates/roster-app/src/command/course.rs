use std::io::Write;

use roster_service::catalog::{Catalog, has_corequisites, referenced_codes, split_requisites};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Prints a course's details: description, split requisites, referenced
/// codes, and the courses that require it.
///
/// ## Errors
/// Returns `NotFound` for unknown codes, or an error if writing fails.
pub fn describe_course(catalog: &Catalog, code: &str, out: &mut impl Write) -> AppResult<()> {
    let course = catalog
        .find_by_code(code)
        .ok_or_else(|| AppError::NotFound(format!("course {code:?}")))?;

    writeln!(out, "{}", course.display())?;
    writeln!(out, "Level: {}", course.level)?;
    if !course.description.is_empty() {
        writeln!(out, "\n{}", course.description)?;
    }

    if course.has_prerequisites() {
        let requisites = split_requisites(&course.prerequisites);
        if !requisites.prerequisites.is_empty() {
            writeln!(out, "\nPrerequisites: {}", requisites.prerequisites)?;
        }
        let corequisites = if requisites.corequisites.is_empty()
            && has_corequisites(&course.prerequisites)
        {
            "see prerequisites"
        } else {
            requisites.corequisites.as_str()
        };
        if !corequisites.is_empty() {
            writeln!(out, "Corequisites: {corequisites}")?;
        }
        let codes = referenced_codes(&course.prerequisites);
        if !codes.is_empty() {
            writeln!(out, "Mentions: {}", codes.join(", "))?;
        }
    }

    let dependents = catalog.required_for(course);
    if !dependents.is_empty() {
        writeln!(out, "\nRequired for:")?;
        for dependent in dependents {
            writeln!(out, "  {}", dependent.display())?;
        }
    }
    Ok(())
}
