//! Project catalog loading and summary statistics
//!
//! The catalog is an ordered, read-only sequence of project records
//! loaded once at startup. Loading fails fast on malformed JSON or
//! duplicate project ids; individual records with missing optional
//! fields are fine.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::project::Project;

/// Error loading or validating a catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog JSON failed to parse
    Parse(serde_json::Error),
    /// Two records share the same project id
    DuplicateId(i64),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "invalid catalog JSON: {}", e),
            CatalogError::DuplicateId(id) => write!(f, "duplicate project id: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            CatalogError::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Summary statistics over a set of projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of projects counted
    pub total: usize,
    /// Project counts by category, in category order
    pub by_type: BTreeMap<String, usize>,
    /// Project counts by start-date year, in year order.
    ///
    /// Records whose start date does not parse are omitted here but
    /// still counted in `total`.
    pub by_year: BTreeMap<i32, usize>,
    /// Sum of all recorded budgets in whole dollars
    pub total_budget: u64,
}

/// An ordered, read-only project catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self { projects })
    }

    /// Parse a catalog from a JSON array of project records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the JSON is malformed or not
    /// an array of project records, and [`CatalogError::DuplicateId`]
    /// when two records share an id. Loading fails fast; a bad catalog
    /// never produces a silently-empty result.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// All records in catalog order
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of records in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Summary statistics over the whole catalog
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let refs: Vec<&Project> = self.projects.iter().collect();
        stats_for(&refs)
    }
}

/// Summary statistics over an arbitrary set of projects.
///
/// Used for the whole catalog and for filtered subsets alike: totals,
/// counts by category, counts by start-date year, and the summed budget
/// of every record that has one.
#[must_use]
pub fn stats_for(projects: &[&Project]) -> CatalogStats {
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    let mut total_budget: u64 = 0;

    for project in projects {
        *by_type.entry(project.project_type.clone()).or_insert(0) += 1;
        if let Some(year) = project.start_year() {
            *by_year.entry(year).or_insert(0) += 1;
        }
        total_budget += project.budget.unwrap_or(0);
    }

    CatalogStats {
        total: projects.len(),
        by_type,
        by_year,
        total_budget,
    }
}
