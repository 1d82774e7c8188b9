//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

use super::trait_::RoleRepository;

/// Mock role repository for testing
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashMap<String, Role>>>,
    memberships: Arc<RwLock<HashSet<(Uuid, String)>>>,
}

impl MockRoleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
            memberships: Arc::new(RwLock::new(HashSet::new())),
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn create(&self, role: Role) -> Result<Role, DomainError> {
        let mut roles = self.roles.write().await;

        if roles.contains_key(&role.name) {
            return Err(DomainError::conflict(
                "DuplicateRoleName",
                format!("Role name '{}' is already taken.", role.name),
            ));
        }

        roles.insert(role.name.clone(), role.clone());
        Ok(role)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.get(name).cloned())
    }

    async fn add_user_to_role(&self, user_id: Uuid, role_name: &str) -> Result<(), DomainError> {
        let roles = self.roles.read().await;
        if !roles.contains_key(role_name) {
            return Err(DomainError::conflict(
                "RoleNotFound",
                format!("Role '{}' does not exist.", role_name),
            ));
        }
        drop(roles);

        let mut memberships = self.memberships.write().await;
        let key = (user_id, role_name.to_string());
        if memberships.contains(&key) {
            return Err(DomainError::conflict(
                "UserAlreadyInRole",
                format!("User is already in role '{}'.", role_name),
            ));
        }

        memberships.insert(key);
        Ok(())
    }
}
