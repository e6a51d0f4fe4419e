use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// A course offered by the catalog
/// Retired courses are never removed from storage, they become inactive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display name, unique among active courses
    pub name: String,

    pub category: CourseCategory,

    /// Soft-delete flag
    pub status: CourseStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    Active,
    Inactive,
}

/// Course track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCategory {
    #[serde(rename = "Front-end")]
    FrontEnd,
    #[serde(rename = "Back-end")]
    BackEnd,
}

impl Course {
    /// Create a new, active Course
    pub fn new(name: String, category: CourseCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            status: CourseStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields
    /// The creation timestamp is preserved
    pub fn update(&mut self, name: String, category: CourseCategory) {
        self.name = name;
        self.category = category;
        self.updated_at = Utc::now();
    }

    /// Soft delete
    pub fn deactivate(&mut self) {
        self.status = CourseStatus::Inactive;
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Active => write!(f, "Active"),
            CourseStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "Active" => Ok(CourseStatus::Active),
            "Inactive" => Ok(CourseStatus::Inactive),
            other => Err(DomainError::UnknownValue {
                kind: "course status",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseCategory::FrontEnd => write!(f, "Front-end"),
            CourseCategory::BackEnd => write!(f, "Back-end"),
        }
    }
}

impl std::str::FromStr for CourseCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "Front-end" => Ok(CourseCategory::FrontEnd),
            "Back-end" => Ok(CourseCategory::BackEnd),
            other => Err(DomainError::UnknownValue {
                kind: "course category",
                value: other.to_string(),
            }),
        }
    }
}
