//! Flightline catalog viewer
//!
//! Command-line front end over the catalog core: collects filter input,
//! validates it, calls the pure filter and policy functions, and renders
//! the results. The current role comes from the remembered demo session.

mod args;
mod auth;
mod catalog;
mod constants;
mod export;
mod output;
mod session;

use std::fs::File;
use std::io;

use chrono::Datelike;
use clap::Parser;

use flightline_common::catalog::stats_for;
use flightline_common::filter::{FilterSpec, filter_projects};
use flightline_common::policy::Permission;
use flightline_common::validators::{YearRangeError, validate_year_range};

use args::{Args, Command, FilterArgs};
use constants::{ERR_EXPORT_NOT_LOGGED_IN, ERR_EXPORT_PERMISSION, ERR_WRITE_EXPORT, MSG_BANNER};
use session::SessionStore;

fn main() {
    let args = Args::parse();

    if args.debug {
        eprintln!("{}{}", MSG_BANNER, env!("CARGO_PKG_VERSION"));
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let store = SessionStore::new(session::default_session_path()?);
    let current = store.load(args.debug);
    // An unknown role string in the session degrades to anonymous here
    let role = current.as_ref().and_then(|s| s.parsed_role());

    match args.command {
        Command::List { filter } => {
            let spec = build_spec(&filter)?;
            let catalog = catalog::load_catalog(args.catalog.as_deref(), args.debug)?;
            let matches = filter_projects(catalog.projects(), &spec);

            for project in &matches {
                println!("{}", output::render_project_line(project));
            }
            println!("{} of {} project(s)", matches.len(), catalog.len());
            Ok(())
        }

        Command::Show { id } => {
            let catalog = catalog::load_catalog(args.catalog.as_deref(), args.debug)?;
            let project = catalog
                .get(id)
                .ok_or_else(|| format!("Project not found: {}", id))?;
            print!("{}", output::render_project_detail(project, role));
            Ok(())
        }

        Command::Stats { filter } => {
            let spec = build_spec(&filter)?;
            let catalog = catalog::load_catalog(args.catalog.as_deref(), args.debug)?;
            let matches = filter_projects(catalog.projects(), &spec);
            let stats = stats_for(&matches);
            print!("{}", output::render_stats(&stats, catalog.len(), role.is_some()));
            Ok(())
        }

        Command::Export { filter, output } => {
            let Some(role) = role else {
                return Err(ERR_EXPORT_NOT_LOGGED_IN.to_string());
            };
            if !role.has_permission(Permission::Read) {
                return Err(ERR_EXPORT_PERMISSION.to_string());
            }

            let spec = build_spec(&filter)?;
            let catalog = catalog::load_catalog(args.catalog.as_deref(), args.debug)?;
            let matches = filter_projects(catalog.projects(), &spec);

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .map_err(|e| format!("{}{}: {}", ERR_WRITE_EXPORT, path.display(), e))?;
                    export::export_csv(file, &matches, Some(role))
                        .map_err(|e| format!("{}{}: {}", ERR_WRITE_EXPORT, path.display(), e))?;
                    println!("Exported {} project(s) to {}", matches.len(), path.display());
                }
                None => {
                    export::export_csv(io::stdout().lock(), &matches, Some(role))
                        .map_err(|e| format!("Export failed: {}", e))?;
                }
            }
            Ok(())
        }

        Command::Login {
            email,
            password,
            demo,
        } => {
            let new_session = if demo {
                auth::demo_session()
            } else {
                // clap guarantees the email is present when --demo is absent
                let email = email.ok_or_else(|| "Email is required".to_string())?;
                let password =
                    password.ok_or_else(|| "Password is required (use --password)".to_string())?;
                auth::authenticate(&email, &password).map_err(|e| e.to_string())?
            };

            store
                .save(&new_session)
                .map_err(|e| format!("Failed to save session: {}", e))?;

            let role_name = new_session
                .parsed_role()
                .map_or("unknown", |r| r.display_name());
            println!("Logged in as {} ({})", new_session.display_name, role_name);
            Ok(())
        }

        Command::Logout => {
            store
                .clear()
                .map_err(|e| format!("Failed to clear session: {}", e))?;
            println!("Logged out");
            Ok(())
        }

        Command::Whoami => {
            println!("{}", output::render_session(current.as_ref()));
            Ok(())
        }
    }
}

/// Validate the year bounds and build a filter spec from the flags.
///
/// Rejects the same inputs the filter form rejects: inverted ranges and
/// years outside 1995..=current. The filter itself never raises; this is
/// the validation layer in front of it.
fn build_spec(filter: &FilterArgs) -> Result<FilterSpec, String> {
    let current_year = chrono::Local::now().year();
    validate_year_range(filter.year_from, filter.year_to, current_year).map_err(|e| match e {
        YearRangeError::FromAfterTo => "Start year cannot be greater than end year".to_string(),
        YearRangeError::FromOutOfRange => {
            format!("Start year must be between 1995 and {}", current_year)
        }
        YearRangeError::ToOutOfRange => {
            format!("End year must be between 1995 and {}", current_year)
        }
    })?;
    Ok(filter.to_spec())
}
