// src/repositories/mod.rs
//
// Persistence ports and their SQLite adapters

pub mod course_repository;

pub use course_repository::{CourseRepository, SqliteCourseRepository};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
