//! Year range validation
//!
//! Validates the year bounds collected by the filter form. The catalog
//! has no records before 1995 and future years are rejected, so bounds
//! must fall within `1995..=current_year` and the lower bound must not
//! exceed the upper one.

use crate::MIN_PROJECT_YEAR;

/// Validation error for filter year bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRangeError {
    /// The lower bound is greater than the upper bound
    FromAfterTo,
    /// The lower bound falls outside `1995..=current_year`
    FromOutOfRange,
    /// The upper bound falls outside `1995..=current_year`
    ToOutOfRange,
}

/// Validate a pair of optional year bounds.
///
/// Either bound may be absent (unbounded). `current_year` is passed in
/// by the caller so validation stays a pure function of its inputs.
///
/// # Errors
///
/// Returns a `YearRangeError` variant describing the validation failure.
///
/// # Examples
///
/// ```
/// use flightline_common::validators::{YearRangeError, validate_year_range};
///
/// assert!(validate_year_range(Some(2020), Some(2023), 2026).is_ok());
/// assert!(validate_year_range(None, None, 2026).is_ok());
///
/// assert_eq!(
///     validate_year_range(Some(2023), Some(2020), 2026),
///     Err(YearRangeError::FromAfterTo)
/// );
/// assert_eq!(
///     validate_year_range(Some(1990), None, 2026),
///     Err(YearRangeError::FromOutOfRange)
/// );
/// assert_eq!(
///     validate_year_range(None, Some(2030), 2026),
///     Err(YearRangeError::ToOutOfRange)
/// );
/// ```
pub fn validate_year_range(
    from: Option<i32>,
    to: Option<i32>,
    current_year: i32,
) -> Result<(), YearRangeError> {
    if let Some(from) = from
        && !(MIN_PROJECT_YEAR..=current_year).contains(&from)
    {
        return Err(YearRangeError::FromOutOfRange);
    }

    if let Some(to) = to
        && !(MIN_PROJECT_YEAR..=current_year).contains(&to)
    {
        return Err(YearRangeError::ToOutOfRange);
    }

    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(YearRangeError::FromAfterTo);
    }

    Ok(())
}
