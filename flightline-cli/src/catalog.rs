//! Catalog acquisition
//!
//! Loads the project catalog from a JSON file, or falls back to the
//! built-in sample catalog when no file is given. Loading fails fast on
//! malformed data; there is no partial catalog.

use std::fs;
use std::path::Path;

use flightline_common::Catalog;

use crate::constants::ERR_READ_CATALOG;

/// The built-in sample catalog (five demonstration projects)
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../data/sample_projects.json");

/// Load the catalog from a file, or the built-in sample when `path` is `None`.
///
/// # Errors
///
/// Returns a descriptive error when the file cannot be read or the
/// catalog JSON is malformed.
pub fn load_catalog(path: Option<&Path>, debug: bool) -> Result<Catalog, String> {
    let catalog = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("{}{}: {}", ERR_READ_CATALOG, path.display(), e))?;
            Catalog::from_json(&contents).map_err(|e| e.to_string())?
        }
        None => Catalog::from_json(SAMPLE_CATALOG_JSON).map_err(|e| e.to_string())?,
    };

    if debug {
        eprintln!("Loaded {} project(s)", catalog.len());
    }

    Ok(catalog)
}
