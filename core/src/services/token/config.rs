//! Configuration for the token service

use jsonwebtoken::Algorithm;

/// Configuration for the token service
///
/// Built once at startup and never mutated; the signing key, issuer and
/// audience are process-wide.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric JWT signing secret
    pub secret: String,
    /// Issuer claim stamped on every access token
    pub issuer: String,
    /// Audience claim stamped on every access token
    pub audience: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_secs: i64,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "authgate".to_string(),
            audience: "authgate-clients".to_string(),
            access_token_expiry_secs: 5,
            algorithm: Algorithm::HS256,
        }
    }
}

impl From<ag_shared::JwtConfig> for TokenServiceConfig {
    fn from(config: ag_shared::JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            audience: config.audience,
            access_token_expiry_secs: config.access_token_expiry_secs,
            algorithm: Algorithm::HS256,
        }
    }
}
