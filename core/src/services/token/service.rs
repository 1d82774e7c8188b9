//! Main token service implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Number of random bytes drawn for a refresh token
const REFRESH_TOKEN_BYTES: usize = 32;

/// Service for issuing and validating session tokens
///
/// Access tokens are short-lived signed JWTs; refresh tokens are opaque
/// random values. The service holds no mutable state: the keys and
/// validation rules are derived once from the configuration.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Full validation: signature, issuer, audience and lifetime
    validation: Validation,
    /// Signature-only validation for the refresh flow
    expired_validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.leeway = 0;

        // The refresh flow only cares about signature integrity: the
        // caller asserts the token has expired, and issuer/audience were
        // already enforced when the token was issued.
        let mut expired_validation = Validation::new(config.algorithm);
        expired_validation.validate_exp = false;
        expired_validation.validate_aud = false;
        expired_validation.required_spec_claims.clear();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            expired_validation,
        }
    }

    /// Generates a signed access token for a user
    ///
    /// The claims carry the user's id, display name, email and avatar
    /// reference; the expiry is a fixed short duration after issuance.
    /// No side effects.
    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_secs,
        );
        self.encode_jwt(&claims)
    }

    /// Generates an opaque refresh token
    ///
    /// Draws 32 cryptographically secure random bytes and base64-encodes
    /// them. Pure with respect to domain state; the caller is responsible
    /// for persisting the value against the user. No uniqueness check is
    /// performed beyond the entropy of the source.
    pub fn generate_refresh_token(&self) -> String {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        BASE64.encode(bytes)
    }

    /// Recovers the claims from a possibly expired access token
    ///
    /// Validates the cryptographic signature only; issuer, audience and
    /// lifetime checks are skipped on this path. After decoding, the
    /// header algorithm must match the configured HMAC-SHA256 family,
    /// rejecting tokens forged under a different or weaker algorithm even
    /// if they would verify under a naive check.
    pub fn decode_expired_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.expired_validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                _ => TokenError::InvalidTokenFormat,
            })?;

        if token_data.header.alg != self.config.algorithm {
            return Err(TokenError::AlgorithmMismatch.into());
        }

        Ok(token_data.claims)
    }

    /// Verifies an access token with full validation
    ///
    /// Enforces signature, issuer, audience and lifetime. Used by the
    /// authentication middleware on protected endpoints.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                _ => TokenError::InvalidTokenFormat,
            })?;

        Ok(token_data.claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
