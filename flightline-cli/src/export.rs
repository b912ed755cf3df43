//! CSV export
//!
//! Writes the filtered catalog as CSV with the column layout the project
//! database export uses. Sensitive columns follow the visibility policy:
//! budgets and internal paths are blanked when the policy withholds them
//! for the exporting viewer.

use std::io;

use csv::WriterBuilder;

use flightline_common::policy::{Role, visible_fields};
use flightline_common::project::Project;

/// Column headers for the export
pub const CSV_HEADERS: &[&str] = &[
    "Project Name",
    "Type",
    "Client",
    "Start Date",
    "End Date",
    "State",
    "County",
    "Municipality",
    "Budget",
    "Internal Path",
];

/// Write projects as CSV to any writer.
///
/// One row per project in the given order. The budget column is blank
/// when the project has no budget or the policy withholds it; the
/// internal path column is blank unless the policy discloses it.
///
/// # Errors
///
/// Returns an error when the underlying writer fails.
pub fn export_csv<W: io::Write>(
    writer: W,
    projects: &[&Project],
    role: Option<Role>,
) -> csv::Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for project in projects {
        let fields = visible_fields(project, role);
        let budget = match (fields.budget, project.budget) {
            (true, Some(budget)) => budget.to_string(),
            _ => String::new(),
        };
        let internal_path = if fields.internal_path {
            project.internal_path.clone()
        } else {
            String::new()
        };

        csv_writer.write_record(&[
            project.project_name.as_str(),
            project.project_type.as_str(),
            project.client.as_str(),
            project.start_date.as_str(),
            project.end_date.as_str(),
            project.state.as_str(),
            project.county.as_str(),
            project.municipality.as_str(),
            budget.as_str(),
            internal_path.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
