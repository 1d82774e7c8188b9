//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for credential login and token refresh
///
/// Both successful paths rotate the user's refresh token: the previous
/// value is overwritten unconditionally, so at most one refresh token is
/// valid per user at any time.
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential-store operations
    user_repository: Arc<U>,
    /// Token service for signing and validation
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate a user by username and password
    ///
    /// The username is the registered email address. On success a fresh
    /// access/refresh pair is issued and the new refresh token is
    /// persisted, invalidating any previously issued one even without an
    /// explicit refresh.
    ///
    /// # Errors
    ///
    /// * `DomainError::Unauthorized` - unknown user or wrong password;
    ///   no further detail is exposed to the caller
    pub async fn authenticate(&self, user_name: &str, password: &str) -> DomainResult<TokenPair> {
        let mut user = self
            .user_repository
            .find_by_email(user_name)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let password_ok =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;
        if !password_ok {
            tracing::debug!(user = %user_name, "authentication rejected: password mismatch");
            return Err(DomainError::Unauthorized);
        }

        let access_token = self.token_service.generate_access_token(&user)?;
        let refresh_token = self.token_service.generate_refresh_token();

        user.set_refresh_token(refresh_token.clone());
        self.user_repository.update(user).await?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Exchange an expired access token plus its refresh token for a new pair
    ///
    /// Protocol (Presented -> Accepted | Rejected):
    /// 1. The access token must be structurally valid with an intact
    ///    signature; lifetime is deliberately not checked.
    /// 2. The email claim recovers the user.
    /// 3. The presented refresh token must exactly equal the stored one;
    ///    a token consumed by a previous refresh is no longer valid.
    /// 4. On acceptance both tokens are regenerated and the new refresh
    ///    token overwrites the old one (rotation, unconditional).
    ///
    /// # Errors
    ///
    /// * `DomainError::Token(TokenError::InvalidRefreshToken)` - unknown
    ///   user or stale/mismatched refresh token
    /// * `DomainError::Token(_)` - signature or algorithm failure on the
    ///   presented access token
    pub async fn refresh(&self, access_token: &str, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.token_service.decode_expired_token(access_token)?;

        let mut user = self
            .user_repository
            .find_by_email(&claims.email)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if !user.refresh_token_matches(refresh_token) {
            tracing::debug!(user = %claims.email, "refresh rejected: stale refresh token");
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        let new_access_token = self.token_service.generate_access_token(&user)?;
        let new_refresh_token = self.token_service.generate_refresh_token();

        user.set_refresh_token(new_refresh_token.clone());
        self.user_repository.update(user).await?;

        Ok(TokenPair::new(new_access_token, new_refresh_token))
    }
}
