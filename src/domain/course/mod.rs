pub mod entity;
pub mod invariants;

pub use entity::{Course, CourseCategory, CourseStatus};
pub use invariants::validate_course;
