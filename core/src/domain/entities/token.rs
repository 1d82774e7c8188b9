//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Claims structure for the access token payload
///
/// Access tokens are transient: they are signed, handed to the client and
/// regenerated on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name ("First Last")
    pub name: String,

    /// Email address, used to recover the user during refresh
    pub email: String,

    /// Avatar reference, if the user uploaded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates access token claims for a user
    ///
    /// The expiry is an absolute instant a fixed, short duration after
    /// issuance.
    pub fn for_user(user: &User, issuer: &str, audience: &str, lifetime_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_secs);

        Self {
            sub: user.id.to_string(),
            name: user.full_name(),
            email: user.email.clone(),
            avatar: user.avatar_url.clone(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client after authentication or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let mut user = User::new(
            "a@x.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "12 Analytical St".to_string(),
            "female".to_string(),
            "$2b$12$hash".to_string(),
        );
        user.set_avatar("Images/ada.jpeg".to_string());
        user
    }

    #[test]
    fn test_claims_carry_identity() {
        let user = sample_user();
        let claims = Claims::for_user(&user, "authgate", "authgate-clients", 5);

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.name, "Ada Lovelace");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.avatar.as_deref(), Some("Images/ada.jpeg"));
        assert_eq!(claims.iss, "authgate");
        assert_eq!(claims.aud, "authgate-clients");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiry_is_short() {
        let user = sample_user();
        let claims = Claims::for_user(&user, "authgate", "authgate-clients", 5);
        assert!(claims.exp - claims.iat <= 5);
    }

    #[test]
    fn test_claims_expiration() {
        let user = sample_user();
        let mut claims = Claims::for_user(&user, "authgate", "authgate-clients", 5);

        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization_omits_missing_avatar() {
        let mut user = sample_user();
        user.avatar_url = None;
        let claims = Claims::for_user(&user, "authgate", "authgate-clients", 5);

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("avatar").is_none());

        let parsed: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, claims);
    }
}
