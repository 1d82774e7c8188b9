//! API response envelope types

use serde::{Deserialize, Serialize};

/// Token payload carried inside a successful authentication response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationContent {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token, rotated on every use
    pub refresh_token: String,
}

/// Standard response envelope for the authentication endpoints
///
/// Every JSON body produced by the token endpoints uses this shape:
/// `{ "isSuccess": bool, "errorMessage": string|null, "content": object|null }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainResponse {
    /// Whether the request was successful
    pub is_success: bool,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Token payload (present on authentication success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<AuthenticationContent>,
}

impl MainResponse {
    /// Create a successful response with a token payload
    pub fn success(content: AuthenticationContent) -> Self {
        Self {
            is_success: true,
            error_message: None,
            content: Some(content),
        }
    }

    /// Create a successful response without a payload
    pub fn success_empty() -> Self {
        Self {
            is_success: true,
            error_message: None,
            content: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            error_message: Some(message.into()),
            content: None,
        }
    }
}
