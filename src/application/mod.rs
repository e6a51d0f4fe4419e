// src/application/mod.rs
//
// Application Layer
//
// The boundary between callers and the services. It translates internal
// errors into responses a caller can render and never holds business logic.

pub mod error_handling;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
