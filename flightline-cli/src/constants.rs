//! Shared constants for the Flightline CLI

/// Banner printed before the version at startup
pub const MSG_BANNER: &str = "Flightline Catalog Viewer v";

/// Directory name under the platform data dir for Flightline state
pub const DATA_DIR_NAME: &str = "flightline";

/// File name of the persisted session record
pub const SESSION_FILE_NAME: &str = "session.json";

/// Error when the platform data directory cannot be determined
pub const ERR_NO_DATA_DIR: &str = "Could not determine platform data directory";

/// Error when export is attempted without a logged-in session
pub const ERR_EXPORT_NOT_LOGGED_IN: &str = "You must be logged in to export project data";

/// Error when the current role lacks the read permission
pub const ERR_EXPORT_PERMISSION: &str = "You do not have permission to export data";

/// Error prefix for an unreadable catalog file
pub const ERR_READ_CATALOG: &str = "Failed to read catalog file ";

/// Error prefix for an unwritable export file
pub const ERR_WRITE_EXPORT: &str = "Failed to write export file ";
