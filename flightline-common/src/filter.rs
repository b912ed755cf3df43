//! Project catalog filtering
//!
//! A [`FilterSpec`] is a set of independent, optional predicates collected
//! from the filter form. [`filter_projects`] applies them conjunctively
//! over a catalog slice, preserving catalog order. Both are pure: the
//! catalog is never mutated and identical inputs always produce identical
//! output.

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// A filter over the project catalog
///
/// Every field is optional; an empty vector or `None` means the
/// corresponding condition is inactive and accepts everything. The
/// default spec therefore matches every project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Accepted project categories (empty = accept all)
    #[serde(default)]
    pub project_type: Vec<String>,
    /// Inclusive lower bound on the start-date year
    #[serde(default)]
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the start-date year
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Accepted locations (empty = accept all)
    #[serde(default)]
    pub location: Vec<String>,
    /// Accepted resolution values in canonical string form (empty = accept all)
    #[serde(default)]
    pub resolution: Vec<String>,
}

impl FilterSpec {
    /// Returns `true` when no condition is active.
    ///
    /// An empty spec matches every project, so callers can skip the
    /// filter pass entirely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.project_type.is_empty()
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.location.is_empty()
            && self.resolution.is_empty()
    }

    /// Test a single project against this spec.
    ///
    /// All active conditions must hold (conjunctive matching):
    ///
    /// - **Type**: the project's category is one of the accepted types.
    /// - **Year range**: the start-date year falls inside the inclusive
    ///   bounds. A start date that fails to parse is rejected whenever a
    ///   bound is active (fail closed) and ignored otherwise.
    /// - **Location**: some accepted location equals the project's state,
    ///   or appears as a substring of its county or municipality. The
    ///   substring match is deliberately loose: "Dane" matches
    ///   "Dane County", and would match any county containing "Dane".
    /// - **Resolution**: the project's resolution, in canonical string
    ///   form, is one of the accepted values. A project with no recorded
    ///   resolution is rejected whenever this condition is active.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if !self.project_type.is_empty() && !self.project_type.contains(&project.project_type) {
            return false;
        }

        if self.year_from.is_some() || self.year_to.is_some() {
            let Some(year) = project.start_year() else {
                // Unparseable start date under an active year bound
                return false;
            };
            if let Some(from) = self.year_from
                && year < from
            {
                return false;
            }
            if let Some(to) = self.year_to
                && year > to
            {
                return false;
            }
        }

        if !self.location.is_empty() {
            let found = self.location.iter().any(|loc| {
                project.state == *loc
                    || project.county.contains(loc.as_str())
                    || project.municipality.contains(loc.as_str())
            });
            if !found {
                return false;
            }
        }

        if !self.resolution.is_empty() {
            match project.resolution_str() {
                Some(res) => {
                    if !self.resolution.contains(&res) {
                        return false;
                    }
                }
                // Missing resolution never wildcard-matches
                None => return false,
            }
        }

        true
    }
}

/// Filter a catalog slice against a spec.
///
/// Returns references to the matching projects in their original
/// relative order. The catalog is never modified, and repeated calls
/// with identical inputs return identical results.
///
/// An inverted year range (`year_from > year_to`) is not an error: no
/// project can satisfy both bounds, so the result is simply empty. The
/// form layer is expected to reject inverted ranges up front via
/// [`crate::validators::validate_year_range`].
///
/// # Examples
///
/// ```
/// use flightline_common::filter::{FilterSpec, filter_projects};
///
/// let catalog: Vec<flightline_common::Project> = Vec::new();
/// let spec = FilterSpec::default();
///
/// // The default spec matches everything
/// assert!(spec.is_empty());
/// assert!(filter_projects(&catalog, &spec).is_empty());
/// ```
#[must_use]
pub fn filter_projects<'a>(catalog: &'a [Project], spec: &FilterSpec) -> Vec<&'a Project> {
    catalog.iter().filter(|p| spec.matches(p)).collect()
}
