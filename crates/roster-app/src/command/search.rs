use std::io::Write;

use roster_core::model::Course;

use crate::error::AppResult;

/// ## Summary
/// Prints one `TAG NUM - Name` line per course, in result order.
///
/// ## Errors
/// Returns an error if writing fails.
pub fn print_results(results: &[&Course], out: &mut impl Write) -> AppResult<()> {
    if results.is_empty() {
        writeln!(out, "No courses found.")?;
        return Ok(());
    }
    for course in results {
        writeln!(out, "{}", course.display())?;
    }
    Ok(())
}
