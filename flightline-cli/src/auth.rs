//! Demo authentication
//!
//! A fixed table of demo accounts sharing one demo password. This is a
//! stand-in for a real identity provider: credentials are compared
//! against a SHA-256 digest and the result is a plain session record.
//! Nothing here constitutes real security.

use std::fmt;

use sha2::{Digest, Sha256};

use flightline_common::Role;
use flightline_common::validators::{EmailError, validate_email};

use crate::session::Session;

/// SHA-256 digest of the shared demo password ("demo123")
const DEMO_PASSWORD_SHA256: &str =
    "d3ad9315b7be5dd53b31a273b3b3aba5defe700808305aa16a3062b76658a791";

/// A demo account entry
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    /// Login email
    pub email: &'static str,
    /// Role granted on login
    pub role: Role,
    /// Display name shown in the UI
    pub name: &'static str,
}

/// The fixed demo account table
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@ayresassociates.com",
        role: Role::Admin,
        name: "John Smith",
    },
    DemoAccount {
        email: "editor@ayresassociates.com",
        role: Role::Editor,
        name: "Sarah Johnson",
    },
    DemoAccount {
        email: "viewer@ayresassociates.com",
        role: Role::Viewer,
        name: "Mike Wilson",
    },
];

/// Authentication failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The email failed shape validation
    InvalidEmail(EmailError),
    /// Unknown account or wrong password
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidEmail(e) => write!(f, "invalid email: {:?}", e),
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Hex-encoded SHA-256 digest of a password
fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Authenticate a demo account.
///
/// The email must pass shape validation and match a demo account, and
/// the password digest must match the shared demo digest. Unknown
/// account and wrong password both report [`AuthError::InvalidCredentials`]
/// so the error does not reveal which accounts exist.
///
/// # Errors
///
/// Returns an `AuthError` on validation or credential failure.
pub fn authenticate(email: &str, password: &str) -> Result<Session, AuthError> {
    validate_email(email).map_err(AuthError::InvalidEmail)?;

    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email)
        .ok_or(AuthError::InvalidCredentials)?;

    if password_digest(password) != DEMO_PASSWORD_SHA256 {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(Session::new(account.role, account.name, account.email))
}

/// The quick demo-admin session, no credentials required
#[must_use]
pub fn demo_session() -> Session {
    Session::new(Role::Admin, "Demo Admin", "demo@ayresassociates.com")
}
