// src/lib.rs
// CourseHub - course catalog core
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - Explicit: validators are called by the services, no hidden dispatch
// - Repositories are traits; SQLite adapters implement them

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod validation;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
pub use config::{AppConfig, DatabaseConfig, ValidationConfig};
pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use domain::{validate_course, Course, CourseCategory, CourseStatus, DomainError};
pub use error::{AppError, AppResult, FieldViolation};
pub use repositories::{CourseRepository, SqliteCourseRepository};
pub use services::{CourseRequest, CourseService};
pub use validation::{UniqueCourseNameValidator, ValidationError, Validator};
