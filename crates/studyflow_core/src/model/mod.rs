//! Domain model for the study panels.
//!
//! # Responsibility
//! - Define the records owned by the task, note and schedule panels.
//! - Provide field-level validation shared by services and forms.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` that is never reused.
//! - Required text fields are non-blank once a record exists.

pub mod note;
pub mod schedule;
pub mod task;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure for domain records and input forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField(&'static str),
    /// Email input does not look like an address.
    InvalidEmail(String),
    /// Schedule time is not a 24-hour `HH:MM` string.
    InvalidTime(String),
    /// Unknown enum label in textual input.
    UnknownValue { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`; expected HH:MM"),
            Self::UnknownValue { field, value } => {
                write!(f, "unknown value `{value}` for `{field}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects blank values with `EmptyField`.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
