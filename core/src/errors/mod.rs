//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{join_store_errors, StoreError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// All errors are handled at the request boundary and translated to a
/// response envelope or an HTTP status there; none are retried.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{}", join_store_errors(.errors))]
    Conflict { errors: Vec<StoreError> },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Build a conflict from a single store error
    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        DomainError::Conflict {
            errors: vec![StoreError::new(code, description)],
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
