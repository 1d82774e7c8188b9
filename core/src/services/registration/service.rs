//! Registration and role orchestration service

use std::sync::Arc;

use ag_shared::validation::validators;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, StoreError};
use crate::repositories::{RoleRepository, UserRepository};

use super::password_policy::PasswordPolicy;
use super::traits::AvatarStorage;

/// Input for registering a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub address: String,
    pub gender: String,
    /// Base64-encoded avatar image payload, if the client sent one
    pub avatar: Option<String>,
}

/// Orchestration service for registration and role management
///
/// Thin by design: field validation happens at the request boundary, the
/// password policy and uniqueness rules belong to the credential store,
/// and avatar persistence is delegated to the content store. This service
/// only sequences those collaborators.
pub struct RegistrationService<U, R, A>
where
    U: UserRepository,
    R: RoleRepository,
    A: AvatarStorage,
{
    /// User repository for credential-store operations
    user_repository: Arc<U>,
    /// Role repository for role and membership operations
    role_repository: Arc<R>,
    /// Content store for avatar images
    avatar_storage: Arc<A>,
    /// Password complexity rules
    password_policy: PasswordPolicy,
}

impl<U, R, A> RegistrationService<U, R, A>
where
    U: UserRepository,
    R: RoleRepository,
    A: AvatarStorage,
{
    /// Create a new registration service
    pub fn new(
        user_repository: Arc<U>,
        role_repository: Arc<R>,
        avatar_storage: Arc<A>,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            avatar_storage,
            password_policy,
        }
    }

    /// Register a new user
    ///
    /// A malformed email, password-policy violations and a duplicate
    /// email are aggregated into a single conflict carrying
    /// code+description pairs, surfaced to the caller verbatim. If an
    /// avatar payload is present it is decoded and stored first so the
    /// created user already carries its reference path.
    pub async fn register_user(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store_errors: Vec<StoreError> = Vec::new();

        if !validators::is_valid_email(&new_user.email) {
            store_errors.push(StoreError::new(
                "InvalidEmail",
                format!("Email '{}' is invalid.", new_user.email),
            ));
        }

        store_errors.extend(self.password_policy.check(&new_user.password));

        if self.user_repository.exists_by_email(&new_user.email).await? {
            store_errors.push(StoreError::new(
                "DuplicateEmail",
                format!("Email '{}' is already taken.", new_user.email),
            ));
        }

        if !store_errors.is_empty() {
            return Err(DomainError::Conflict {
                errors: store_errors,
            });
        }

        let password_hash = bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        let mut user = User::new(
            new_user.email,
            new_user.first_name,
            new_user.last_name,
            new_user.address,
            new_user.gender,
            password_hash,
        );

        if let Some(payload) = new_user.avatar.as_deref().filter(|p| !p.trim().is_empty()) {
            let avatar_url = self.store_avatar(&user, payload).await?;
            user.set_avatar(avatar_url);
        }

        let created = self.user_repository.create(user).await?;
        tracing::info!(user_id = %created.id, "registered new user");
        Ok(created)
    }

    /// Create a new role
    ///
    /// Duplicate names are rejected by the store, not merged.
    pub async fn create_role(&self, role_name: &str) -> DomainResult<Role> {
        let role = self.role_repository.create(Role::new(role_name.to_string())).await?;
        tracing::info!(role = %role.name, "created role");
        Ok(role)
    }

    /// Assign an existing role to the user registered under `email`
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - no user with this email
    /// * `DomainError::Conflict` - store-level failure (unknown role,
    ///   already a member), surfaced verbatim
    pub async fn assign_role(&self, email: &str, role_name: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        self.role_repository.add_user_to_role(user.id, role_name).await?;
        tracing::info!(user_id = %user.id, role = %role_name, "assigned role to user");
        Ok(())
    }

    /// Decode the avatar payload and hand it to the content store
    ///
    /// The generated file name embeds a random identifier so concurrent
    /// uploads cannot collide on the destination path.
    async fn store_avatar(&self, user: &User, payload: &str) -> DomainResult<String> {
        let bytes = BASE64.decode(payload).map_err(|_| DomainError::Validation {
            message: "userAvatar is not valid base64".to_string(),
        })?;

        let file_name = format!(
            "{}_{}_{}.jpeg",
            Uuid::new_v4(),
            user.first_name.trim(),
            user.last_name.trim(),
        );

        self.avatar_storage.store(&bytes, &file_name).await
    }
}
