// src/config.rs
//
// Runtime configuration
//
// PRINCIPLES:
// - Every knob has a default that matches production behavior
// - Nothing is read implicitly; callers hand a config to the constructors

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub validation: ValidationConfig,
}

/// SQLite pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file; `None` means `{APP_DATA}/coursehub/coursehub.db`
    pub path: Option<PathBuf>,

    pub max_connections: u32,

    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: 15,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    /// Resolve the database file path, creating the parent directory
    pub fn resolve_path(&self) -> AppResult<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .ok_or_else(|| {
                    AppError::Other("Could not determine app data directory".to_string())
                })?
                .join("coursehub")
                .join("coursehub.db"),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(path)
    }
}

/// Submission validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When false the course-name uniqueness check is left unwired and
    /// every submission passes it
    pub enforce_unique_names: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_unique_names: true,
        }
    }
}
