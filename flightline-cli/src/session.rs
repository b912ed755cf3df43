//! Session persistence
//!
//! Remembers the last demo login between runs, the way the browser app
//! kept its session in local storage. The session is a small JSON record
//! in the platform data directory. A missing or unreadable record simply
//! means "not logged in" - tampering or corruption can only ever lower
//! privileges.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use flightline_common::Role;

use crate::constants::{DATA_DIR_NAME, ERR_NO_DATA_DIR, SESSION_FILE_NAME};

/// A remembered login session
///
/// The role is stored as the raw string and parsed with [`Role::parse`]
/// at use sites, so an unknown or edited role value degrades to an
/// anonymous session instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Role name ("admin", "editor", "viewer")
    pub role: String,
    /// Display name shown in output
    pub display_name: String,
    /// Account email
    pub email: String,
}

impl Session {
    /// Build a session record for a role
    #[must_use]
    pub fn new(role: Role, display_name: &str, email: &str) -> Self {
        Self {
            role: role.as_str().to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
        }
    }

    /// The typed role, or `None` when the stored string is unknown
    #[must_use]
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Get the default session file path for the platform.
///
/// - **Linux**: `~/.local/share/flightline/session.json`
/// - **macOS**: `~/Library/Application Support/flightline/session.json`
/// - **Windows**: `%APPDATA%\flightline\session.json`
///
/// # Errors
///
/// Returns an error if the platform's data directory cannot be determined.
pub fn default_session_path() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir().ok_or_else(|| ERR_NO_DATA_DIR.to_string())?;
    Ok(data_dir.join(DATA_DIR_NAME).join(SESSION_FILE_NAME))
}

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the remembered session.
    ///
    /// Returns `None` when no session file exists or when it fails to
    /// parse. Parse failures are reported on stderr when `debug` is set,
    /// then treated as logged out.
    pub fn load(&self, debug: bool) -> Option<Session> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                if debug {
                    eprintln!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                }
                None
            }
        }
    }

    /// Persist a session record, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }

    /// Forget the remembered session.
    ///
    /// Removing a session that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
