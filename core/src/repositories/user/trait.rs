//! User repository trait defining the interface for user persistence.
//!
//! This is the user half of the credential store contract. The trait is
//! async-first and uses Result types for proper error handling.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// The email doubles as the username, so this also serves the
    /// lookup-by-username path of the authenticate flow. Case handling is
    /// an implementation concern.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The email is already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// Used by the token flows to persist the rotated refresh token; the
    /// update is an unconditional overwrite (last writer wins).
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
