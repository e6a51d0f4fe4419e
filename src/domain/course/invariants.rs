use super::entity::Course;
use crate::domain::{DomainError, DomainResult};

pub const NAME_MIN_CHARS: usize = 5;
pub const NAME_MAX_CHARS: usize = 100;

/// Validates all Course invariants
/// Name uniqueness needs storage and is checked by `UniqueCourseNameValidator`
pub fn validate_course(course: &Course) -> DomainResult<()> {
    validate_name(&course.name)?;
    Ok(())
}

/// Name cannot be blank and must fit the catalog's length bounds
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Course name cannot be empty".to_string(),
        ));
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(DomainError::InvariantViolation(format!(
            "Course name must be between {} and {} characters, got {}",
            NAME_MIN_CHARS, NAME_MAX_CHARS, chars
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Course domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Name cannot be blank
/// 3. Name is 5 to 100 characters long
/// 4. At most one ACTIVE course per name (enforced at submission time)
/// 5. Any number of INACTIVE courses may share a name
/// 6. Created timestamp never changes
