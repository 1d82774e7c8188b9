//! Domain-specific error types for token and credential-store operations
//!
//! This module provides error type definitions for token validation and
//! store-level failures. HTTP translation happens in the presentation
//! layer; nothing here knows about status codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token-related errors
///
/// These errors represent token validation and generation failures on the
/// refresh path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unexpected signing algorithm")]
    AlgorithmMismatch,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// A single store-level failure, surfaced to callers verbatim
///
/// Creation failures (duplicate role, duplicate email, weak password)
/// are reported as aggregated code+description pairs, exactly as the
/// credential store produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreError {
    /// Machine-readable error code, e.g. `DuplicateEmail`
    pub code: String,

    /// Human-readable description
    pub description: String,
}

impl StoreError {
    /// Create a new store error
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

/// Join store errors into the aggregated `code: description` string shown
/// to registration callers
pub fn join_store_errors(errors: &[StoreError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_join_as_code_description_pairs() {
        let errors = vec![
            StoreError::new("PasswordTooShort", "Passwords must be at least 6 characters."),
            StoreError::new("PasswordRequiresDigit", "Passwords must have at least one digit ('0'-'9')."),
        ];

        let joined = join_store_errors(&errors);
        assert_eq!(
            joined,
            "PasswordTooShort: Passwords must be at least 6 characters., \
             PasswordRequiresDigit: Passwords must have at least one digit ('0'-'9')."
        );
    }

    #[test]
    fn store_error_serializes_both_fields() {
        let error = StoreError::new("DuplicateEmail", "Email 'a@x.com' is already taken.");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "DuplicateEmail");
        assert_eq!(json["description"], "Email 'a@x.com' is already taken.");
    }
}
