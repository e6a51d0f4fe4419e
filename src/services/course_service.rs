// src/services/course_service.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::domain::course::{validate_course, Course, CourseCategory, CourseStatus};
use crate::error::{AppError, AppResult};
use crate::repositories::CourseRepository;
use crate::validation::{UniqueCourseNameValidator, Validator};

/// Candidate data for creating or updating a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub category: CourseCategory,
}

pub struct CourseService {
    course_repo: Arc<dyn CourseRepository>,
    name_validator: UniqueCourseNameValidator,
}

impl CourseService {
    pub fn new(course_repo: Arc<dyn CourseRepository>, config: &ValidationConfig) -> Self {
        let name_validator = if config.enforce_unique_names {
            UniqueCourseNameValidator::new(course_repo.clone())
        } else {
            log::warn!("Course name uniqueness check disabled by configuration");
            UniqueCourseNameValidator::unwired()
        };

        Self {
            course_repo,
            name_validator,
        }
    }

    pub fn create_course(&self, request: CourseRequest) -> AppResult<Uuid> {
        self.name_validator.validate(&request)?;

        let course = Course::new(request.name, request.category);
        validate_course(&course)?;
        self.course_repo.save(&course)?;

        log::info!("Created course {} '{}'", course.id, course.name);
        Ok(course.id)
    }

    /// Renaming is checked for uniqueness; keeping the current name is not
    pub fn update_course(&self, course_id: Uuid, request: CourseRequest) -> AppResult<Course> {
        let mut course = self
            .course_repo
            .get_by_id(course_id)?
            .ok_or(AppError::NotFound)?;

        if course.name != request.name {
            self.name_validator.validate(&request)?;
        }

        course.update(request.name, request.category);
        validate_course(&course)?;
        self.course_repo.save(&course)?;

        log::info!("Updated course {} '{}'", course.id, course.name);
        Ok(course)
    }

    pub fn get_course(&self, course_id: Uuid) -> AppResult<Option<Course>> {
        self.course_repo.get_by_id(course_id)
    }

    pub fn list_active_courses(&self) -> AppResult<Vec<Course>> {
        self.course_repo.list_by_status(CourseStatus::Active)
    }

    /// Soft delete: the row stays, its name becomes free for reuse
    pub fn deactivate_course(&self, course_id: Uuid) -> AppResult<()> {
        let mut course = self
            .course_repo
            .get_by_id(course_id)?
            .ok_or(AppError::NotFound)?;

        if !course.is_active() {
            return Ok(());
        }

        course.deactivate();
        self.course_repo.save(&course)?;

        log::info!("Deactivated course {} '{}'", course.id, course.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::course_repository::test_support::temp_pool;
    use crate::repositories::{MockCourseRepository, SqliteCourseRepository};

    fn service() -> (tempfile::TempDir, CourseService) {
        let (dir, pool) = temp_pool();
        let repo: Arc<dyn CourseRepository> = Arc::new(SqliteCourseRepository::new(pool));
        (dir, CourseService::new(repo, &ValidationConfig::default()))
    }

    fn request(name: &str) -> CourseRequest {
        CourseRequest {
            name: name.to_string(),
            category: CourseCategory::BackEnd,
        }
    }

    #[test]
    fn test_create_rejects_active_duplicate() {
        let (_dir, service) = service();
        service.create_course(request("Algebra")).unwrap();

        match service.create_course(request("Algebra")) {
            Err(AppError::Validation(violation)) => {
                assert_eq!(violation.field, "name");
                assert_eq!(violation.message, "A course with name 'Algebra' already exists");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_name_is_reusable_after_deactivation() {
        let (_dir, service) = service();
        let first = service.create_course(request("Algebra")).unwrap();
        service.deactivate_course(first).unwrap();

        let second = service.create_course(request("Algebra")).unwrap();
        assert_ne!(first, second);

        let active = service.list_active_courses().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
    }

    #[test]
    fn test_names_differing_in_case_do_not_collide() {
        let (_dir, service) = service();
        service.create_course(request("Algebra")).unwrap();
        assert!(service.create_course(request("ALGEBRA")).is_ok());
    }

    #[test]
    fn test_update_keeping_own_name_succeeds() {
        let (_dir, service) = service();
        let id = service.create_course(request("Algebra")).unwrap();

        let updated = service
            .update_course(
                id,
                CourseRequest {
                    name: "Algebra".to_string(),
                    category: CourseCategory::FrontEnd,
                },
            )
            .unwrap();
        assert_eq!(updated.category, CourseCategory::FrontEnd);
    }

    #[test]
    fn test_update_to_taken_name_is_rejected() {
        let (_dir, service) = service();
        service.create_course(request("Algebra")).unwrap();
        let id = service.create_course(request("Geometry")).unwrap();

        let err = service.update_course(id, request("Algebra")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let unchanged = service.get_course(id).unwrap().unwrap();
        assert_eq!(unchanged.name, "Geometry");
    }

    #[test]
    fn test_update_missing_course_is_not_found() {
        let (_dir, service) = service();
        let err = service
            .update_course(Uuid::new_v4(), request("Algebra"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_domain_invariants_still_apply() {
        let (_dir, service) = service();
        let err = service.create_course(request("Art")).unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_deactivate_missing_course_is_not_found() {
        let (_dir, service) = service();
        assert!(matches!(
            service.deactivate_course(Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_disabled_uniqueness_skips_lookup() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_name().never();
        repo.expect_save().times(2).returning(|_| Ok(()));

        let config = ValidationConfig {
            enforce_unique_names: false,
        };
        let service = CourseService::new(Arc::new(repo), &config);

        service.create_course(request("Algebra")).unwrap();
        service.create_course(request("Algebra")).unwrap();
    }

    #[test]
    fn test_rejected_submission_is_not_saved() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_name().returning(|name| {
            Ok(vec![Course::new(name.to_string(), CourseCategory::BackEnd)])
        });
        repo.expect_save().never();

        let service = CourseService::new(Arc::new(repo), &ValidationConfig::default());
        assert!(service.create_course(request("Algebra")).is_err());
    }
}
