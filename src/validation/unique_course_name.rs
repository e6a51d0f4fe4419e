// src/validation/unique_course_name.rs
//
// Course names must be unique among ACTIVE courses.
// Inactive (retired) courses never block a name.
//
// Matching is exact: no trimming, no case folding. The check and the later
// save are not atomic, so two concurrent submissions can both pass.

use std::sync::Arc;

use super::{ValidationError, Validator};
use crate::domain::CourseStatus;
use crate::error::{AppResult, FieldViolation};
use crate::repositories::CourseRepository;
use crate::services::CourseRequest;

/// Field the uniqueness violation is attached to
pub const NAME_FIELD: &str = "name";

pub struct UniqueCourseNameValidator {
    course_repo: Option<Arc<dyn CourseRepository>>,
}

impl UniqueCourseNameValidator {
    pub fn new(course_repo: Arc<dyn CourseRepository>) -> Self {
        Self {
            course_repo: Some(course_repo),
        }
    }

    /// A validator with no storage behind it; every submission passes
    pub fn unwired() -> Self {
        Self { course_repo: None }
    }

    pub fn is_wired(&self) -> bool {
        self.course_repo.is_some()
    }

    /// Boolean view of `validate`; storage faults are still errors
    pub fn is_valid(&self, request: &CourseRequest) -> AppResult<bool> {
        match self.validate(request) {
            Ok(()) => Ok(true),
            Err(ValidationError::Rejected(_)) => Ok(false),
            Err(ValidationError::Storage(err)) => Err(err),
        }
    }
}

pub fn duplicate_name_message(name: &str) -> String {
    format!("A course with name '{}' already exists", name)
}

impl Validator<CourseRequest> for UniqueCourseNameValidator {
    fn validate(&self, request: &CourseRequest) -> Result<(), ValidationError> {
        let Some(course_repo) = &self.course_repo else {
            log::warn!(
                "Course name uniqueness is not enforced, accepting '{}'",
                request.name
            );
            return Ok(());
        };

        let existing = course_repo.find_by_name(&request.name)?;
        log::debug!(
            "Found {} course(s) named '{}'",
            existing.len(),
            request.name
        );

        if existing.iter().any(|course| course.status == CourseStatus::Active) {
            log::warn!("Rejected duplicate course name '{}'", request.name);
            return Err(FieldViolation::new(NAME_FIELD, duplicate_name_message(&request.name)).into());
        }

        Ok(())
    }
}
