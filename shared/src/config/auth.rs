//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};
use std::env;

/// JWT signing configuration
///
/// Loaded once at startup and never mutated afterwards. The signing key,
/// issuer and audience are process-wide; every access token is signed and
/// validated with the same symmetric key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret key for HMAC-SHA256 signing
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token lifetime in seconds
    ///
    /// Deliberately very short by default, forcing clients through the
    /// refresh flow frequently.
    pub access_token_expiry_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            issuer: String::from("authgate"),
            audience: String::from("authgate-clients"),
            access_token_expiry_secs: 5,
        }
    }
}

impl JwtConfig {
    /// Load the JWT configuration from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE` and
    /// `JWT_ACCESS_TOKEN_EXPIRY_SECS`, falling back to development
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("JWT_SECRET").unwrap_or(defaults.secret),
            issuer: env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            access_token_expiry_secs: env::var("JWT_ACCESS_TOKEN_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_secs),
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == JwtConfig::default().secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_short_lived() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_secs, 5);
        assert!(config.is_using_default_secret());
    }
}
