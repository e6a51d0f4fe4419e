// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool
///
/// Every connection gets:
/// - Foreign keys enabled
/// - WAL journal mode
/// - The configured busy timeout
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let db_path = config.resolve_path()?;
    let busy_timeout_ms = config.busy_timeout_ms;

    let manager = SqliteConnectionManager::file(&db_path).with_init(move |conn| {
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {};",
            busy_timeout_ms
        ))?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::info!(
        "Opened course database at {} (max {} connections)",
        db_path.display(),
        config.max_connections
    );

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}
