//! MySQL implementation of the UserRepository trait.
//!
//! Concrete user persistence over SQLx. UUIDs are stored as CHAR(36)
//! strings; the email column carries a unique index, and unique-key
//! violations are mapped to the store-level conflict shape.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ag_core::domain::entities::user::User;
use ag_core::errors::DomainError;
use ag_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: Self::get(row, "email")?,
            first_name: Self::get(row, "first_name")?,
            last_name: Self::get(row, "last_name")?,
            address: Self::get(row, "address")?,
            gender: Self::get(row, "gender")?,
            password_hash: Self::get(row, "password_hash")?,
            avatar_url: row.try_get("avatar_url").map_err(|e| DomainError::Database {
                message: format!("Failed to get avatar_url: {}", e),
            })?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get refresh_token: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    fn get(row: &sqlx::mysql::MySqlRow, column: &str) -> Result<String, DomainError> {
        row.try_get(column).map_err(|e| DomainError::Database {
            message: format!("Failed to get {}: {}", column, e),
        })
    }

    fn map_create_error(e: sqlx::Error, email: &str) -> DomainError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return DomainError::conflict(
                    "DuplicateEmail",
                    format!("Email '{}' is already taken.", email),
                );
            }
        }
        DomainError::Database {
            message: format!("Database query failed: {}", e),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, first_name, last_name, address, gender,
                   password_hash, avatar_url, refresh_token,
                   created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) as count FROM users WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, first_name, last_name, address, gender,
                password_hash, avatar_url, refresh_token,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.address)
            .bind(&user.gender)
            .bind(&user.password_hash)
            .bind(&user.avatar_url)
            .bind(&user.refresh_token)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_create_error(e, &user.email))?;

        tracing::debug!(user_id = %user.id, "inserted user");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, first_name = ?, last_name = ?, address = ?,
                gender = ?, password_hash = ?, avatar_url = ?,
                refresh_token = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.address)
            .bind(&user.gender)
            .bind(&user.password_hash)
            .bind(&user.avatar_url)
            .bind(&user.refresh_token)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }
}
