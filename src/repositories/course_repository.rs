// src/repositories/course_repository.rs
//
// Course persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::course::{Course, CourseCategory, CourseStatus};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn save(&self, course: &Course) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Course>>;
    /// Every course, active or not, whose name equals `name` byte for byte
    fn find_by_name(&self, name: &str) -> AppResult<Vec<Course>>;
    fn list_by_status(&self, status: CourseStatus) -> AppResult<Vec<Course>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
}

const COURSE_COLUMNS: &str = "id, name, category, status, created_at, updated_at";

pub struct SqliteCourseRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCourseRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Course - returns rusqlite::Error for query_map compatibility
    fn row_to_course(row: &Row) -> Result<Course, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))?;

        let name: String = row.get("name")?;

        let category_str: String = row.get("category")?;
        let category = category_str
            .parse::<CourseCategory>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e)))?;

        let status_str: String = row.get("status")?;
        let status = status_str
            .parse::<CourseStatus>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)))?;

        let created_at = parse_timestamp(row, "created_at", 4)?;
        let updated_at = parse_timestamp(row, "updated_at", 5)?;

        Ok(Course {
            id,
            name,
            category,
            status,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(row: &Row, column: &str, index: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e)))
}

impl CourseRepository for SqliteCourseRepository {
    fn save(&self, course: &Course) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO courses (
                id, name, category, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                course.id.to_string(),
                course.name,
                course.category.to_string(),
                course.status.to_string(),
                course.created_at.to_rfc3339(),
                course.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM courses WHERE id = ?1",
            COURSE_COLUMNS
        ))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_course) {
            Ok(course) => Ok(Some(course)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_by_name(&self, name: &str) -> AppResult<Vec<Course>> {
        let conn = self.pool.get()?;

        // BINARY pins exact matching regardless of the column's declared collation
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM courses
             WHERE name = ?1 COLLATE BINARY
             ORDER BY created_at",
            COURSE_COLUMNS
        ))?;

        let courses: Vec<Course> = stmt
            .query_map(params![name], Self::row_to_course)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    fn list_by_status(&self, status: CourseStatus) -> AppResult<Vec<Course>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM courses
             WHERE status = ?1
             ORDER BY name",
            COURSE_COLUMNS
        ))?;

        let courses: Vec<Course> = stmt
            .query_map(params![status.to_string()], Self::row_to_course)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("DELETE FROM courses WHERE id = ?1", params![id.to_string()])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
