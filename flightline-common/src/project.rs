//! Aerial-survey project records
//!
//! The immutable project record that makes up the catalog, plus its
//! attached file entries and footprint geometry. Field names match the
//! catalog JSON produced by the project database export.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used by catalog exports (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A file attached to a project
///
/// File sizes come from the export as display strings ("2.5GB", "150KB")
/// and are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// File name including extension
    pub name: String,
    /// File category (e.g., "orthophoto", "lidar", "report")
    #[serde(rename = "type")]
    pub file_type: String,
    /// Human-readable file size
    pub size: String,
}

/// Project footprint boundary
///
/// A GeoJSON-style polygon: one outer ring plus optional holes, each ring
/// a sequence of `[longitude, latitude]` pairs. Consumed by renderers
/// only; the filter never looks at geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry type (always "Polygon" in current exports)
    #[serde(rename = "type")]
    pub kind: String,
    /// Polygon rings as `[lon, lat]` coordinate pairs
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// An aerial-survey project record
///
/// Records are loaded once at startup and treated as read-only for the
/// rest of the session. `start_date <= end_date` is expected from the
/// source database but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: i64,
    /// Display name of the project
    pub project_name: String,
    /// Project category (e.g., "Ortho", "LiDAR")
    pub project_type: String,
    /// Client organization name
    pub client: String,
    /// Project start date as an ISO calendar date string
    pub start_date: String,
    /// Project end date as an ISO calendar date string
    pub end_date: String,
    /// Two-letter state code
    pub state: String,
    /// County name
    pub county: String,
    /// Municipality name
    pub municipality: String,
    /// Project budget in whole dollars (sensitive, disclosed per policy)
    #[serde(default)]
    pub budget: Option<u64>,
    /// Imagery resolution in inches per pixel
    #[serde(default)]
    pub resolution: Option<f64>,
    /// Internal network path to project deliverables (sensitive)
    #[serde(default)]
    pub internal_path: String,
    /// Project description (disclosed per policy)
    #[serde(default)]
    pub description: String,
    /// Whether the project's details are publicly viewable
    pub is_public: bool,
    /// Footprint boundary for map rendering
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Files attached to the project (disclosed per policy)
    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

impl Project {
    /// Extract the calendar year from the start date.
    ///
    /// Returns `None` when the start date does not parse as an ISO
    /// calendar date. The filter treats that as non-matching whenever a
    /// year bound is active.
    #[must_use]
    pub fn start_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT)
            .ok()
            .map(|d| d.year())
    }

    /// Canonical string form of the resolution.
    ///
    /// Integral values print without a fractional part ("6", not "6.0")
    /// so that numeric resolutions compare equal to the string values the
    /// filter form collects. Returns `None` when no resolution is recorded.
    #[must_use]
    pub fn resolution_str(&self) -> Option<String> {
        self.resolution.map(|r| {
            if r.fract() == 0.0 && r.is_finite() {
                format!("{}", r as i64)
            } else {
                r.to_string()
            }
        })
    }
}
