//! Text rendering
//!
//! The rendering boundary: turns projects, stats, and sessions into the
//! text the CLI prints. All functions here build strings; printing and
//! exit codes stay in `main`. What gets rendered for a project is
//! decided by the visibility policy, never here.

use chrono::NaiveDate;

use flightline_common::catalog::CatalogStats;
use flightline_common::policy::{Role, visible_fields};
use flightline_common::project::{DATE_FORMAT, Project};

use crate::session::Session;

/// Format a whole-dollar amount as "$1,234,567"
#[must_use]
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an ISO calendar date as "April 15, 2023".
///
/// Unparseable dates render as-is rather than erroring; the catalog may
/// carry bad dates and rendering must not abort on them.
#[must_use]
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// One listing line for a project
#[must_use]
pub fn render_project_line(project: &Project) -> String {
    let year = project
        .start_year()
        .map_or_else(|| "????".to_string(), |y| y.to_string());
    format!(
        "[{}] {} ({}, {}, {})",
        project.id, project.project_name, project.project_type, project.client, year
    )
}

/// Full detail view for a project, honoring the visibility policy.
///
/// Name, type, client, dates, and location always render. Budget,
/// description, files, and the internal path render only when the
/// policy discloses them for this viewer.
#[must_use]
pub fn render_project_detail(project: &Project, role: Option<Role>) -> String {
    let fields = visible_fields(project, role);
    let mut out = String::new();

    out.push_str(&format!("{}\n", project.project_name));
    out.push_str(&format!("  Type:     {}\n", project.project_type));
    out.push_str(&format!("  Client:   {}\n", project.client));
    out.push_str(&format!(
        "  Date:     {} - {}\n",
        format_date(&project.start_date),
        format_date(&project.end_date)
    ));
    out.push_str(&format!(
        "  Location: {}, {}, {}\n",
        project.municipality, project.county, project.state
    ));
    if let Some(res) = project.resolution_str() {
        out.push_str(&format!("  Resolution: {}\"/pixel\n", res));
    }

    if fields.budget && let Some(budget) = project.budget {
        out.push_str(&format!("  Budget:   {}\n", format_currency(budget)));
    }
    if fields.description && !project.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", project.description));
    }
    if fields.files && !project.files.is_empty() {
        out.push_str("  Files:\n");
        for file in &project.files {
            out.push_str(&format!(
                "    {} ({}, {})\n",
                file.name, file.file_type, file.size
            ));
        }
    }
    if fields.internal_path {
        out.push_str(&format!("  Project files: {}\n", project.internal_path));
    }

    out
}

/// Summary statistics block.
///
/// The budget total renders only for logged-in viewers, matching the
/// visibility tier for individual budgets.
#[must_use]
pub fn render_stats(stats: &CatalogStats, catalog_total: usize, logged_in: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Showing {} of {} project(s)\n",
        stats.total, catalog_total
    ));

    if !stats.by_type.is_empty() {
        out.push_str("By type:\n");
        for (project_type, count) in &stats.by_type {
            out.push_str(&format!("  {:12} {}\n", project_type, count));
        }
    }

    if !stats.by_year.is_empty() {
        out.push_str("By year:\n");
        for (year, count) in &stats.by_year {
            out.push_str(&format!("  {:12} {}\n", year, count));
        }
    }

    if logged_in {
        out.push_str(&format!(
            "Total budget: {}\n",
            format_currency(stats.total_budget)
        ));
    }

    out
}

/// Current-session line for `whoami`
#[must_use]
pub fn render_session(session: Option<&Session>) -> String {
    match session {
        Some(session) => match session.parsed_role() {
            Some(role) => {
                let mut perms: Vec<String> = role
                    .permissions()
                    .to_vec()
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect();
                perms.sort();
                format!(
                    "{} <{}> - {} [{}]",
                    session.display_name,
                    session.email,
                    role.display_name(),
                    perms.join(", ")
                )
            }
            None => format!(
                "{} <{}> - unrecognized role \"{}\", treated as logged out",
                session.display_name, session.email, session.role
            ),
        },
        None => "Not logged in".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightline_common::project::ProjectFile;

    fn sample_project(is_public: bool) -> Project {
        Project {
            id: 1,
            project_name: "Madison Metro Orthophotography 2023".to_string(),
            project_type: "Ortho".to_string(),
            client: "WROC".to_string(),
            start_date: "2023-04-15".to_string(),
            end_date: "2023-08-30".to_string(),
            state: "WI".to_string(),
            county: "Dane County".to_string(),
            municipality: "Madison".to_string(),
            budget: Some(125_000),
            resolution: Some(6.0),
            internal_path: "R:/WROC/2023/Dane/Madison_Ortho".to_string(),
            description: "High-resolution orthophotography".to_string(),
            is_public,
            geometry: None,
            files: vec![ProjectFile {
                name: "Madison_Ortho_2023.tif".to_string(),
                file_type: "orthophoto".to_string(),
                size: "2.5GB".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(85_000), "$85,000");
        assert_eq!(format_currency(125_000), "$125,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-04-15"), "April 15, 2023");
        assert_eq!(format_date("2023-08-01"), "August 1, 2023");
        // Unparseable dates pass through
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn test_render_project_line() {
        let line = render_project_line(&sample_project(true));
        assert_eq!(line, "[1] Madison Metro Orthophotography 2023 (Ortho, WROC, 2023)");
    }

    #[test]
    fn test_render_project_line_bad_date() {
        let mut project = sample_project(true);
        project.start_date = "bad".to_string();
        assert!(render_project_line(&project).contains("????"));
    }

    #[test]
    fn test_detail_private_anonymous() {
        // Nothing sensitive for an anonymous viewer of a private project
        let detail = render_project_detail(&sample_project(false), None);
        assert!(detail.contains("Madison Metro Orthophotography 2023"));
        assert!(detail.contains("Client:   WROC"));
        assert!(detail.contains("Madison, Dane County, WI"));
        assert!(!detail.contains("Budget"));
        assert!(!detail.contains("Description"));
        assert!(!detail.contains("Files"));
        assert!(!detail.contains("R:/WROC"));
    }

    #[test]
    fn test_detail_public_anonymous() {
        // Public unlocks budget, description, and files but never the path
        let detail = render_project_detail(&sample_project(true), None);
        assert!(detail.contains("Budget:   $125,000"));
        assert!(detail.contains("Description: High-resolution orthophotography"));
        assert!(detail.contains("Madison_Ortho_2023.tif (orthophoto, 2.5GB)"));
        assert!(!detail.contains("R:/WROC"));
    }

    #[test]
    fn test_detail_private_with_role() {
        let detail = render_project_detail(&sample_project(false), Some(Role::Viewer));
        assert!(detail.contains("Budget:   $125,000"));
        assert!(detail.contains("Project files: R:/WROC/2023/Dane/Madison_Ortho"));
    }

    #[test]
    fn test_detail_empty_path_not_rendered() {
        let mut project = sample_project(false);
        project.internal_path = String::new();
        let detail = render_project_detail(&project, Some(Role::Admin));
        assert!(!detail.contains("Project files:"));
    }

    #[test]
    fn test_render_stats() {
        let mut by_type = std::collections::BTreeMap::new();
        by_type.insert("Ortho".to_string(), 2);
        let mut by_year = std::collections::BTreeMap::new();
        by_year.insert(2023, 2);
        let stats = CatalogStats {
            total: 2,
            by_type,
            by_year,
            total_budget: 445_000,
        };

        let anonymous = render_stats(&stats, 5, false);
        assert!(anonymous.contains("Showing 2 of 5 project(s)"));
        assert!(anonymous.contains("Ortho"));
        assert!(!anonymous.contains("Total budget"));

        let logged_in = render_stats(&stats, 5, true);
        assert!(logged_in.contains("Total budget: $445,000"));
    }

    #[test]
    fn test_render_session() {
        assert_eq!(render_session(None), "Not logged in");

        let session = Session::new(Role::Editor, "Sarah Johnson", "editor@ayresassociates.com");
        let line = render_session(Some(&session));
        assert!(line.contains("Sarah Johnson"));
        assert!(line.contains("Editor"));
        assert!(line.contains("read, write"));

        let rogue = Session {
            role: "superuser".to_string(),
            display_name: "X".to_string(),
            email: "x@y.com".to_string(),
        };
        assert!(render_session(Some(&rogue)).contains("treated as logged out"));
    }
}
