//! Validation error shared by record construction and the store boundary.
//!
//! # Invariants
//! - Every variant renders a human-readable message naming the violated
//!   constraint.
//! - `field()` returns the offending field whenever one can be named.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-supplied data violates a structural or domain rule.
///
/// Always recoverable by the caller: fix the input and retry.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    /// `score` lies outside `[0, 10]`.
    ScoreOutOfRange { score: f64 },
    /// A numeric field is NaN or infinite.
    NonFiniteNumber { field: &'static str },
    /// A date field is not a real `YYYY-MM-DD` calendar date.
    InvalidDate { field: &'static str, value: String },
    /// Newsletter window is reversed.
    DateOrder {
        start_date: String,
        end_date: String,
    },
    /// Untyped payload is missing a field or carries a value of the wrong type.
    Malformed {
        record: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Returns the offending field name, when the violation is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            Self::EmptyField { field, .. } => Some(field),
            Self::ScoreOutOfRange { .. } => Some("score"),
            Self::NonFiniteNumber { field } => Some(field),
            Self::InvalidDate { field, .. } => Some(field),
            Self::DateOrder { .. } => Some("start_date"),
            Self::Malformed { .. } => None,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { record, field } => {
                write!(f, "{record} is missing required field: {field}")
            }
            Self::ScoreOutOfRange { score } => {
                write!(f, "score must be between 0 and 10, got {score}")
            }
            Self::NonFiniteNumber { field } => write!(f, "{field} must be a finite number"),
            Self::InvalidDate { field, value } => {
                write!(f, "{field} must be in 'YYYY-MM-DD' format, got `{value}`")
            }
            Self::DateOrder {
                start_date,
                end_date,
            } => write!(
                f,
                "start_date cannot be after end_date ({start_date} > {end_date})"
            ),
            Self::Malformed { record, message } => write!(f, "invalid {record} payload: {message}"),
        }
    }
}

impl Error for ValidationError {}
