//! Login email validation
//!
//! Light-weight shape check for the email collected by the login form.
//! This is not RFC 5321 validation; it only catches obviously broken
//! input before the credential lookup runs.

/// Maximum length for login emails in characters
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Validation error for login emails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// Email is empty
    Empty,
    /// Email exceeds maximum length
    TooLong,
    /// Email has no `@`, or nothing on one side of it
    MissingAtSign,
    /// Email contains whitespace or control characters
    InvalidCharacters,
}

/// Validate a login email.
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (255 characters)
/// - Contains exactly one `@` with text on both sides
/// - No whitespace or control characters
///
/// # Errors
///
/// Returns an `EmailError` variant describing the validation failure.
///
/// # Examples
///
/// ```
/// use flightline_common::validators::{EmailError, validate_email};
///
/// assert!(validate_email("viewer@ayresassociates.com").is_ok());
///
/// assert_eq!(validate_email(""), Err(EmailError::Empty));
/// assert_eq!(validate_email("no-at-sign"), Err(EmailError::MissingAtSign));
/// assert_eq!(validate_email("two@at@signs"), Err(EmailError::MissingAtSign));
/// assert_eq!(validate_email("has space@x.com"), Err(EmailError::InvalidCharacters));
/// ```
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(EmailError::TooLong);
    }

    if email.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(EmailError::InvalidCharacters);
    }

    let mut parts = email.split('@');
    let (local, domain) = (parts.next(), parts.next());
    if parts.next().is_some() {
        return Err(EmailError::MissingAtSign);
    }
    match (local, domain) {
        (Some(local), Some(domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(EmailError::MissingAtSign),
    }
}
