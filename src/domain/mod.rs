// src/domain/mod.rs
//
// Domain Root
//
// Declares the domain modules and re-exports their public API.
// Other modules import from `crate::domain::*`

pub mod course;

pub use course::{validate_course, Course, CourseCategory, CourseStatus};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
