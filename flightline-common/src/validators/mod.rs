//! Input validation functions
//!
//! Reusable validators for values collected from forms before they reach
//! the pure filter and policy functions. The filter itself never raises
//! on odd input; these validators let the form layer reject it up front
//! with a specific error.

mod email;
mod year_range;

pub use email::{EmailError, MAX_EMAIL_LENGTH, validate_email};
pub use year_range::{YearRangeError, validate_year_range};
