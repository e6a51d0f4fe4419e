// src/validation/mod.rs
//
// Submission validators
//
// RULES:
// - A validator reads the submission, never mutates it
// - A rejection is a FieldViolation, storage faults pass through untouched
// - Validators are invoked explicitly by the service handling the request

pub mod unique_course_name;

pub use unique_course_name::UniqueCourseNameValidator;

use thiserror::Error;

use crate::error::{AppError, FieldViolation};

/// Outcome of a failed validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The submission broke the rule
    #[error(transparent)]
    Rejected(#[from] FieldViolation),

    /// The rule could not be evaluated
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl ValidationError {
    /// The field-scoped rejection, if this is one
    pub fn violation(&self) -> Option<&FieldViolation> {
        match self {
            ValidationError::Rejected(violation) => Some(violation),
            ValidationError::Storage(_) => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(violation) => AppError::Validation(violation),
            ValidationError::Storage(inner) => inner,
        }
    }
}

/// A single rule applied to a submission of type `T`
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, input: &T) -> Result<(), ValidationError>;
}
