//! Domain error to HTTP translation
//!
//! All domain errors cross the request boundary exactly once, here. Each
//! endpoint family has its own contract, so the mapping is grouped by
//! family rather than by error variant. Nothing is retried.

use actix_web::HttpResponse;

use ag_core::errors::{DomainError, TokenError};
use ag_shared::types::response::MainResponse;

/// Map errors from the token refresh endpoint
///
/// Failures are always a 400 carrying the response envelope. A broken or
/// forged access token reads differently from a stale refresh pairing,
/// matching the two rejection branches of the refresh protocol.
pub fn refresh_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Token(TokenError::InvalidRefreshToken) => {
            HttpResponse::BadRequest().json(MainResponse::error("Invalid Request"))
        }
        DomainError::Token(_) => {
            HttpResponse::BadRequest().json(MainResponse::error("Invalid Token Found"))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(MainResponse::error(message))
        }
        other => unexpected(other),
    }
}

/// Map errors from the authenticate endpoint
///
/// Bad credentials are a bare 401 with no body; nothing about which check
/// failed is leaked to the caller.
pub fn authenticate_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthorized => HttpResponse::Unauthorized().finish(),
        other => unexpected(other),
    }
}

/// Map errors from the register endpoint
///
/// Store-level failures (policy violations, duplicate email) are joined
/// into a single "code: description" string, surfaced verbatim.
pub fn register_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Conflict { errors } => {
            HttpResponse::BadRequest().json(ag_core::errors::join_store_errors(&errors))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(message),
        other => unexpected(other),
    }
}

/// Map errors from the role endpoints
///
/// Store errors are surfaced as code+description pairs; a missing user on
/// assignment is reported with the original "no user" message rather than
/// a store-level error.
pub fn role_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Conflict { errors } => HttpResponse::BadRequest().json(errors),
        DomainError::NotFound { .. } => {
            HttpResponse::BadRequest().json("There are no user exist with this email")
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(message),
        other => unexpected(other),
    }
}

/// Fallback for unexpected store or signing failures
///
/// These are fatal to the request: log and return a generic failure
/// without detail.
fn unexpected(error: DomainError) -> HttpResponse {
    log::error!("Unexpected API error: {:?}", error);
    HttpResponse::InternalServerError().json(MainResponse::error("An internal error occurred"))
}
