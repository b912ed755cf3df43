//! Roles, permissions, and the field visibility policy
//!
//! Roles come from the login layer as strings; unknown strings parse to
//! `None` and are treated as anonymous, erring toward minimal
//! disclosure. Permissions are an explicit per-role allow-list, not a
//! hierarchy. The visibility policy is a pure lookup over a project and
//! an optional role.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::project::Project;

/// Permission types for catalog actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Permission {
    /// Permission to remove project records
    Delete,
    /// Permission to administer user accounts and roles
    ManageUsers,
    /// Permission to view project records and export catalog data
    Read,
    /// Permission to create and edit project records
    Write,
}

impl Permission {
    /// Convert permission to its configuration string.
    ///
    /// Uses strum's AsRefStr to convert PascalCase variants to
    /// snake_case strings (ManageUsers → manage_users) with zero
    /// allocation.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a permission string into a Permission variant.
    ///
    /// Returns Some(Permission) if the string is valid, None otherwise.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "delete" => Some(Permission::Delete),
            "manage_users" => Some(Permission::ManageUsers),
            "read" => Some(Permission::Read),
            "write" => Some(Permission::Write),
            _ => None,
        }
    }
}

/// A set of permissions for a role
///
/// Wraps a `HashSet<Permission>` to store and check a role's allow-list.
#[derive(Debug, Clone, Default)]
pub struct Permissions {
    permissions: HashSet<Permission>,
}

impl Permissions {
    /// Create a new empty permission set
    #[must_use]
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Build a permission set from a slice of permissions
    #[must_use]
    pub fn from_slice(perms: &[Permission]) -> Self {
        Self {
            permissions: perms.iter().copied().collect(),
        }
    }

    /// Check whether the set contains a permission
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Number of permissions in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Convert the set to a vector (order not guaranteed)
    #[must_use]
    pub fn to_vec(&self) -> Vec<Permission> {
        self.permissions.iter().copied().collect()
    }
}

/// A viewer role
///
/// One of three fixed roles. Anonymous viewers carry no role at all and
/// are represented as `Option::<Role>::None` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full catalog control including user management
    Admin,
    /// Can view and edit project records
    Editor,
    /// Read-only access to the full field set
    Viewer,
}

impl Role {
    /// Convert role to its configuration string ("admin", "editor", "viewer")
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a role string into a Role variant.
    ///
    /// Unknown strings return `None`; callers treat that as anonymous so
    /// an unrecognized role never unlocks elevated disclosure.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    /// Human-readable role name for display
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }

    /// The explicit permission allow-list for this role.
    ///
    /// Admin: read, write, delete, manage_users. Editor: read, write.
    /// Viewer: read. Stored as a set per role rather than a hierarchy,
    /// although in practice admin ⊇ editor ⊇ viewer.
    #[must_use]
    pub fn permissions(&self) -> Permissions {
        match self {
            Role::Admin => Permissions::from_slice(&[
                Permission::Read,
                Permission::Write,
                Permission::Delete,
                Permission::ManageUsers,
            ]),
            Role::Editor => Permissions::from_slice(&[Permission::Read, Permission::Write]),
            Role::Viewer => Permissions::from_slice(&[Permission::Read]),
        }
    }

    /// Check whether this role's allow-list contains a permission
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(permission)
    }
}

/// Which sensitive fields of a project may be disclosed
///
/// Name, type, client, dates, and location are always visible and are
/// not tracked here; this set covers only the gated fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleFields {
    /// Project budget may be shown
    pub budget: bool,
    /// Project description may be shown
    pub description: bool,
    /// Internal network path may be shown
    pub internal_path: bool,
    /// Attached file list may be shown
    pub files: bool,
}

impl VisibleFields {
    /// The empty set: nothing sensitive is disclosed
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Names of the disclosed fields, for rendering and logging
    #[must_use]
    pub fn disclosed(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.budget {
            fields.push("budget");
        }
        if self.description {
            fields.push("description");
        }
        if self.internal_path {
            fields.push("internal_path");
        }
        if self.files {
            fields.push("files");
        }
        fields
    }
}

/// Determine which sensitive fields of a project a viewer may see.
///
/// The sensitive tier (budget, description, files) is unlocked when the
/// project is public or the viewer holds any role; every authenticated
/// role unlocks the same tier. The internal path is gated harder: it
/// requires a role and a non-empty path, independent of `is_public`.
///
/// Pure lookup over the two inputs; no global state, identical output
/// for identical input across calls.
///
/// # Examples
///
/// ```
/// use flightline_common::policy::{Role, visible_fields};
/// # let project = flightline_common::Project {
/// #     id: 1, project_name: String::new(), project_type: String::new(),
/// #     client: String::new(), start_date: String::new(), end_date: String::new(),
/// #     state: String::new(), county: String::new(), municipality: String::new(),
/// #     budget: None, resolution: None, internal_path: "R:/x".to_string(),
/// #     description: String::new(), is_public: false, geometry: None, files: Vec::new(),
/// # };
///
/// // Anonymous viewers see nothing sensitive on a private project
/// let fields = visible_fields(&project, None);
/// assert!(!fields.budget);
///
/// // Any authenticated role unlocks the sensitive tier
/// let fields = visible_fields(&project, Some(Role::Viewer));
/// assert!(fields.budget && fields.internal_path);
/// ```
#[must_use]
pub fn visible_fields(project: &Project, role: Option<Role>) -> VisibleFields {
    let unlocked = project.is_public || role.is_some();
    VisibleFields {
        budget: unlocked,
        description: unlocked,
        internal_path: role.is_some() && !project.internal_path.is_empty(),
        files: unlocked,
    }
}

/// Whether a viewer may perform editing actions.
///
/// Editing requires the write permission, held by admins and editors.
#[must_use]
pub fn can_edit(role: Option<Role>) -> bool {
    role.is_some_and(|r| r.has_permission(Permission::Write))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_PERMISSIONS;

    fn project(is_public: bool, internal_path: &str) -> Project {
        Project {
            id: 1,
            project_name: "Test".to_string(),
            project_type: "Ortho".to_string(),
            client: "WROC".to_string(),
            start_date: "2023-04-15".to_string(),
            end_date: "2023-08-30".to_string(),
            state: "WI".to_string(),
            county: "Dane County".to_string(),
            municipality: "Madison".to_string(),
            budget: Some(125_000),
            resolution: Some(6.0),
            internal_path: internal_path.to_string(),
            description: "desc".to_string(),
            is_public,
            geometry: None,
            files: Vec::new(),
        }
    }

    #[test]
    fn test_permission_as_str() {
        assert_eq!(Permission::Read.as_str(), "read");
        assert_eq!(Permission::Write.as_str(), "write");
        assert_eq!(Permission::Delete.as_str(), "delete");
        assert_eq!(Permission::ManageUsers.as_str(), "manage_users");
    }

    #[test]
    fn test_permission_parse() {
        assert_eq!(Permission::parse("read"), Some(Permission::Read));
        assert_eq!(Permission::parse("write"), Some(Permission::Write));
        assert_eq!(Permission::parse("delete"), Some(Permission::Delete));
        assert_eq!(Permission::parse("manage_users"), Some(Permission::ManageUsers));
        assert_eq!(Permission::parse("invalid"), None);
        assert_eq!(Permission::parse(""), None);
    }

    #[test]
    fn test_permission_roundtrip() {
        for perm in [
            Permission::Delete,
            Permission::ManageUsers,
            Permission::Read,
            Permission::Write,
        ] {
            assert_eq!(Permission::parse(perm.as_str()), Some(perm));
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("editor"), Some(Role::Editor));
        assert_eq!(Role::parse("viewer"), Some(Role::Viewer));

        // Unknown roles never parse
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_as_str_roundtrip() {
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_display_names() {
        assert_eq!(Role::Admin.display_name(), "Administrator");
        assert_eq!(Role::Editor.display_name(), "Editor");
        assert_eq!(Role::Viewer.display_name(), "Viewer");
    }

    #[test]
    fn test_role_permission_table() {
        // Admin: read, write, delete, manage_users
        let admin = Role::Admin.permissions();
        assert_eq!(admin.len(), 4);
        assert!(admin.contains(Permission::Read));
        assert!(admin.contains(Permission::Write));
        assert!(admin.contains(Permission::Delete));
        assert!(admin.contains(Permission::ManageUsers));

        // Editor: read, write
        let editor = Role::Editor.permissions();
        assert_eq!(editor.len(), 2);
        assert!(editor.contains(Permission::Read));
        assert!(editor.contains(Permission::Write));
        assert!(!editor.contains(Permission::Delete));
        assert!(!editor.contains(Permission::ManageUsers));

        // Viewer: read only
        let viewer = Role::Viewer.permissions();
        assert_eq!(viewer.len(), 1);
        assert!(viewer.contains(Permission::Read));
        assert!(!viewer.contains(Permission::Write));
    }

    #[test]
    fn test_role_permissions_are_known() {
        // Every permission a role grants appears in ALL_PERMISSIONS
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            for perm in role.permissions().to_vec() {
                assert!(
                    ALL_PERMISSIONS.contains(&perm.as_str()),
                    "{:?} grants '{}' which is not in ALL_PERMISSIONS",
                    role,
                    perm.as_str()
                );
            }
        }
    }

    #[test]
    fn test_role_permission_containment() {
        // admin ⊇ editor ⊇ viewer by convention, even though the table
        // is stored as explicit allow-lists
        let admin = Role::Admin.permissions();
        let editor = Role::Editor.permissions();
        let viewer = Role::Viewer.permissions();

        for perm in viewer.to_vec() {
            assert!(editor.contains(perm));
        }
        for perm in editor.to_vec() {
            assert!(admin.contains(perm));
        }
    }

    #[test]
    fn test_permissions_set_basics() {
        let mut empty = Permissions::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!empty.contains(Permission::Read));

        empty = Permissions::from_slice(&[Permission::Read, Permission::Read]);
        // Duplicate input collapses in the set
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_private_project_anonymous_sees_nothing() {
        let fields = visible_fields(&project(false, "R:/x"), None);
        assert_eq!(fields, VisibleFields::none());
        assert!(fields.disclosed().is_empty());
    }

    #[test]
    fn test_public_project_anonymous_no_internal_path() {
        // Public unlocks budget, description, and files but never the path
        let fields = visible_fields(&project(true, "R:/x"), None);
        assert!(fields.budget);
        assert!(fields.description);
        assert!(fields.files);
        assert!(!fields.internal_path);
        assert_eq!(fields.disclosed(), vec!["budget", "description", "files"]);
    }

    #[test]
    fn test_private_project_any_role_full_tier() {
        // Every authenticated role unlocks the same tier
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            let fields = visible_fields(&project(false, "R:/x"), Some(role));
            assert!(fields.budget);
            assert!(fields.description);
            assert!(fields.files);
            assert!(fields.internal_path);
        }
    }

    #[test]
    fn test_internal_path_requires_non_empty() {
        // A role alone is not enough; the path must exist
        let fields = visible_fields(&project(false, ""), Some(Role::Admin));
        assert!(fields.budget);
        assert!(!fields.internal_path);
    }

    #[test]
    fn test_unknown_role_string_equals_anonymous() {
        // "superuser" does not parse, so the caller passes None and gets
        // the anonymous result
        let role = Role::parse("superuser");
        assert_eq!(role, None);
        assert_eq!(
            visible_fields(&project(false, "R:/x"), role),
            visible_fields(&project(false, "R:/x"), None)
        );
    }

    #[test]
    fn test_visibility_is_stable() {
        // Identical inputs produce identical output across calls
        let p = project(true, "R:/x");
        let first = visible_fields(&p, Some(Role::Viewer));
        let second = visible_fields(&p, Some(Role::Viewer));
        assert_eq!(first, second);
    }

    #[test]
    fn test_can_edit() {
        assert!(can_edit(Some(Role::Admin)));
        assert!(can_edit(Some(Role::Editor)));
        assert!(!can_edit(Some(Role::Viewer)));
        assert!(!can_edit(None));
    }

    #[test]
    fn test_role_serde() {
        // Roles serialize as snake_case strings for the session record
        let json = serde_json::to_string(&Role::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");
        let role: Role = serde_json::from_str("\"viewer\"").expect("parse");
        assert_eq!(role, Role::Viewer);
    }
}
