//! MySQL implementation of the RoleRepository trait.
//!
//! Roles live in a `roles` table with a unique name; membership is a
//! `user_roles` join table with a composite primary key, so a duplicate
//! assignment surfaces as a unique-key violation.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ag_core::domain::entities::role::Role;
use ag_core::errors::DomainError;
use ag_core::repositories::RoleRepository;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_role(row: &sqlx::mysql::MySqlRow) -> Result<Role, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let name: String = row.try_get("name").map_err(|e| DomainError::Database {
            message: format!("Failed to get name: {}", e),
        })?;

        Ok(Role {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name,
        })
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn create(&self, role: Role) -> Result<Role, DomainError> {
        let query = "INSERT INTO roles (id, name) VALUES (?, ?)";

        sqlx::query(query)
            .bind(role.id.to_string())
            .bind(&role.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                    DomainError::conflict(
                        "DuplicateRoleName",
                        format!("Role name '{}' is already taken.", role.name),
                    )
                } else {
                    DomainError::Database {
                        message: format!("Database query failed: {}", e),
                    }
                }
            })?;

        tracing::debug!(role = %role.name, "inserted role");
        Ok(role)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let query = "SELECT id, name FROM roles WHERE name = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_role(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_user_to_role(&self, user_id: Uuid, role_name: &str) -> Result<(), DomainError> {
        let role = self
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| {
                DomainError::conflict("RoleNotFound", format!("Role '{}' does not exist.", role_name))
            })?;

        let query = "INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)";

        sqlx::query(query)
            .bind(user_id.to_string())
            .bind(role.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                    DomainError::conflict(
                        "UserAlreadyInRole",
                        format!("User is already in role '{}'.", role_name),
                    )
                } else {
                    DomainError::Database {
                        message: format!("Database query failed: {}", e),
                    }
                }
            })?;

        Ok(())
    }
}
