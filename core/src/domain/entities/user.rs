//! User entity representing a registered account in the AuthGate system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The email address doubles as the login username. At most one refresh
/// token is valid per user at any time; issuing a new one overwrites the
/// previous value with no history retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique, also used as the username
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Postal address
    pub address: String,

    /// Gender as free-form text
    pub gender: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// Path or URL of the stored avatar image, if one was uploaded
    pub avatar_url: Option<String>,

    /// Currently valid refresh token; `None` until the first login
    pub refresh_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        address: String,
        gender: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            address,
            gender,
            password_hash,
            avatar_url: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The display name embedded in access token claims
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Records the stored avatar reference
    pub fn set_avatar(&mut self, avatar_url: String) {
        self.avatar_url = Some(avatar_url);
        self.updated_at = Utc::now();
    }

    /// Replaces the current refresh token
    ///
    /// This is the rotation step: the previous token, if any, stops being
    /// valid the moment this is persisted.
    pub fn set_refresh_token(&mut self, refresh_token: String) {
        self.refresh_token = Some(refresh_token);
        self.updated_at = Utc::now();
    }

    /// Checks whether `presented` exactly matches the stored refresh token
    pub fn refresh_token_matches(&self, presented: &str) -> bool {
        self.refresh_token.as_deref() == Some(presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "a@x.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "12 Analytical St".to_string(),
            "female".to_string(),
            "$2b$12$hash".to_string(),
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample_user();

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(user.avatar_url.is_none());
        assert!(user.refresh_token.is_none());
    }

    #[test]
    fn test_set_refresh_token_overwrites() {
        let mut user = sample_user();

        user.set_refresh_token("first".to_string());
        assert!(user.refresh_token_matches("first"));

        user.set_refresh_token("second".to_string());
        assert!(user.refresh_token_matches("second"));
        assert!(!user.refresh_token_matches("first"));
    }

    #[test]
    fn test_refresh_token_match_requires_value() {
        let user = sample_user();
        assert!(!user.refresh_token_matches("anything"));
    }

    #[test]
    fn test_set_avatar() {
        let mut user = sample_user();
        user.set_avatar("wwwroot/Images/abc_Ada_Lovelace.jpeg".to_string());
        assert!(user.avatar_url.as_deref().unwrap().contains("Ada"));
    }
}
