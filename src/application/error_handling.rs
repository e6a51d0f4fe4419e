// src/application/error_handling.rs
//
// Error responses for callers
//
// ARCHITECTURE:
// - Maps internal errors to caller-renderable responses
// - Field violations keep their exact message and field
// - Never exposes internal implementation details
// - Logs infrastructure errors for debugging

use serde::{Deserialize, Serialize};
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    /// Submission field the message belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Submission rejected by a validator (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            field: None,
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found"),

            AppError::Validation(violation) => Self {
                field: Some(violation.field),
                ..Self::new(ErrorType::Validation, violation.message)
            },

            AppError::Domain(domain_error) => {
                Self::new(ErrorType::DomainError, "Domain validation failed")
                    .with_details(domain_error.to_string())
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(ErrorType::Database, "Database operation failed")
                    .with_details("Check logs for details")
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed")
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed")
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(ErrorType::FileSystem, "File system operation failed")
                    .with_details(io_error.to_string())
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message)
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource))
    }
}

/// Helper trait to turn Results into serialized ErrorResponses
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldViolation;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_duplicate_name_keeps_field_and_message() {
        let error = ErrorResponse::from_app_error(AppError::Validation(FieldViolation::new(
            "name",
            "A course with name 'Algebra' already exists",
        )));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.field.as_deref(), Some("name"));
        assert_eq!(error.message, "A course with name 'Algebra' already exists");
    }

    #[test]
    fn test_database_error_hides_details() {
        let error = ErrorResponse::from_app_error(AppError::Database(
            rusqlite::Error::QueryReturnedNoRows,
        ));
        assert_eq!(error.error_type, ErrorType::Database);
        assert_eq!(error.details.as_deref(), Some("Check logs for details"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ErrorResponse::not_found("Course")).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Course not found"));
        assert!(!json.contains("\"field\""));
    }

    #[test]
    fn test_to_error_response_serializes_validation() {
        let result: Result<(), AppError> =
            Err(AppError::Validation(FieldViolation::new("name", "taken")));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("\"field\":\"name\""));
        assert!(json.contains("\"error_type\":\"validation\""));
    }
}
