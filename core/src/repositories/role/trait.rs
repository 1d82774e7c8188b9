//! Role repository trait defining the interface for role persistence.
//!
//! This is the role half of the credential store contract: role creation
//! and many-to-many membership management.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

/// Repository trait for Role persistence and membership operations
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Create a new role
    ///
    /// Duplicate names are rejected, not merged.
    ///
    /// # Returns
    /// * `Ok(Role)` - The created role
    /// * `Err(DomainError::Conflict)` - A role with this name exists
    async fn create(&self, role: Role) -> Result<Role, DomainError>;

    /// Find a role by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError>;

    /// Add a user to a role
    ///
    /// # Returns
    /// * `Ok(())` - Membership recorded
    /// * `Err(DomainError::Conflict)` - Unknown role, or the user is
    ///   already a member
    async fn add_user_to_role(&self, user_id: Uuid, role_name: &str) -> Result<(), DomainError>;
}
