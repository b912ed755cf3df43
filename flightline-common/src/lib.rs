//! Flightline Common Library
//!
//! Core types and logic for the Flightline aerial-survey project catalog:
//! the project data model, the catalog filter, and the role-based
//! visibility policy. Everything here is pure and side-effect free; all
//! I/O (catalog files, session storage, rendering) lives in the CLI crate.

pub mod catalog;
pub mod filter;
pub mod policy;
pub mod project;
pub mod validators;

pub use catalog::{Catalog, CatalogError, CatalogStats};
pub use filter::{FilterSpec, filter_projects};
pub use policy::{Permission, Permissions, Role, VisibleFields, can_edit, visible_fields};
pub use project::{Geometry, Project, ProjectFile};

/// Earliest acceptable project year for filter bounds.
///
/// The company's aerial program has no records before 1995, so the
/// filter form rejects year bounds earlier than this.
pub const MIN_PROJECT_YEAR: i32 = 1995;

/// All available permissions in the Flightline catalog.
///
/// These permission strings are used to describe role capabilities in
/// configuration and exports. The list is maintained in alphabetical order.
///
/// Permission meanings:
/// - `delete`: Remove project records from the catalog
/// - `manage_users`: Administer user accounts and role assignments
/// - `read`: View project records and export catalog data
/// - `write`: Create and edit project records
pub const ALL_PERMISSIONS: &[&str] = &["delete", "manage_users", "read", "write"];

/// Number of permissions in the system.
///
/// Derived from `ALL_PERMISSIONS.len()` and provided as a const for
/// places that need the count without calling `.len()` repeatedly.
pub const PERMISSIONS_COUNT: usize = ALL_PERMISSIONS.len();
