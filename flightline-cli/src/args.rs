//! Command-line argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flightline_common::FilterSpec;

/// Get catalog path help text
fn catalog_help() -> String {
    "Catalog JSON file (default: built-in sample catalog)".to_string()
}

/// Flightline aerial-survey catalog viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog JSON file (overrides the built-in sample)
    #[arg(short, long, help = catalog_help())]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging (shows catalog and session diagnostics)
    #[arg(long, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Filter conditions shared by the listing commands
///
/// Every flag is optional and repeatable where it accepts a set; leaving
/// a flag off leaves the corresponding condition inactive.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Accepted project types (repeatable, e.g. --project-type Ortho)
    #[arg(long = "project-type")]
    pub project_type: Vec<String>,

    /// Inclusive lower bound on the start year
    #[arg(long)]
    pub year_from: Option<i32>,

    /// Inclusive upper bound on the start year
    #[arg(long)]
    pub year_to: Option<i32>,

    /// Accepted locations: state code, county, or municipality (repeatable)
    #[arg(long)]
    pub location: Vec<String>,

    /// Accepted resolutions in inches per pixel (repeatable)
    #[arg(long)]
    pub resolution: Vec<String>,
}

impl FilterArgs {
    /// Convert the collected flags into a filter spec
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            project_type: self.project_type.clone(),
            year_from: self.year_from,
            year_to: self.year_to,
            location: self.location.clone(),
            resolution: self.resolution.clone(),
        }
    }
}

/// Flightline subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List projects matching the given filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one project in detail
    Show {
        /// Project id
        id: i64,
    },

    /// Print summary statistics for the matching projects
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export matching projects as CSV (requires login)
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Log in as a demo account and remember the session
    Login {
        /// Account email
        #[arg(required_unless_present = "demo")]
        email: Option<String>,

        /// Account password
        #[arg(short, long)]
        password: Option<String>,

        /// Quick login as the demo administrator
        #[arg(long, default_value = "false")]
        demo: bool,
    },

    /// Forget the remembered session
    Logout,

    /// Show the current session
    Whoami,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        // Catch invalid arg definitions at test time
        Args::command().debug_assert();
    }

    #[test]
    fn test_filter_args_to_spec() {
        let args = FilterArgs {
            project_type: vec!["Ortho".to_string()],
            year_from: Some(2022),
            year_to: Some(2023),
            location: vec!["Dane".to_string()],
            resolution: vec!["6".to_string()],
        };
        let spec = args.to_spec();
        assert_eq!(spec.project_type, vec!["Ortho".to_string()]);
        assert_eq!(spec.year_from, Some(2022));
        assert_eq!(spec.year_to, Some(2023));
        assert_eq!(spec.location, vec!["Dane".to_string()]);
        assert_eq!(spec.resolution, vec!["6".to_string()]);
    }

    #[test]
    fn test_default_filter_args_empty_spec() {
        let spec = FilterArgs::default().to_spec();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_parse_list_with_filters() {
        let args = Args::parse_from([
            "flightline",
            "list",
            "--project-type",
            "Ortho",
            "--project-type",
            "LiDAR",
            "--year-from",
            "2022",
            "--location",
            "Dane",
        ]);
        match args.command {
            Command::List { filter } => {
                assert_eq!(filter.project_type.len(), 2);
                assert_eq!(filter.year_from, Some(2022));
                assert_eq!(filter.location, vec!["Dane".to_string()]);
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_login_demo() {
        let args = Args::parse_from(["flightline", "login", "--demo"]);
        match args.command {
            Command::Login { email, demo, .. } => {
                assert!(email.is_none());
                assert!(demo);
            }
            other => panic!("expected Login, got {:?}", other),
        }
    }

    #[test]
    fn test_login_requires_email_without_demo() {
        assert!(Args::try_parse_from(["flightline", "login"]).is_err());
    }
}
