// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations

use rusqlite::Connection;
use crate::error::{AppError, AppResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
///
/// Safe to call multiple times.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Applied course schema version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Returns 0 if the schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// Runs SQLite's integrity check
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Get database statistics
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let active_course_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM courses WHERE status = 'Active'",
        [],
        |row| row.get(0),
    )?;
    let inactive_course_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM courses WHERE status = 'Inactive'",
        [],
        |row| row.get(0),
    )?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        active_course_count,
        inactive_course_count,
    })
}

/// Database statistics
#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub active_course_count: i64,
    pub inactive_course_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        initialize_database(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        let courses_table: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='courses')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(courses_table);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        set_schema_version(&conn, CURRENT_SCHEMA_VERSION + 1).unwrap();

        assert!(initialize_database(&conn).is_err());
    }

    #[test]
    fn test_status_check_constraint() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO courses (id, name, category, status, created_at, updated_at)
             VALUES ('c1', 'Algebra', 'Back-end', 'Archived', datetime('now'), datetime('now'))",
            [],
        );
        assert!(result.is_err(), "Unknown status should violate the CHECK constraint");
    }

    #[test]
    fn test_database_stats() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();
        assert!(stats.size_bytes > 0);
        assert_eq!(stats.active_course_count, 0);
        assert_eq!(stats.inactive_course_count, 0);
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        verify_database_integrity(&conn).unwrap();
    }
}
