//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per panel.
//! - Keep list ordering and lookup details out of services.
//!
//! # Invariants
//! - Repository writes enforce record `validate()` before mutating state.
//! - A failed write leaves the list untouched.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`).

pub mod memory;
pub mod note_repo;
pub mod schedule_repo;
pub mod task_repo;

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for list storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(Uuid),
    Duplicate(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Duplicate(id) => write!(f, "record already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::Duplicate(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
