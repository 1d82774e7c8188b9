//! Registration and authentication route handlers
//!
//! This module contains all endpoints of the registration API:
//! - User registration (with optional avatar upload)
//! - Credential authentication
//! - Token refresh
//! - Role creation and assignment

pub mod assign_role;
pub mod authenticate;
pub mod create_role;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::auth::AuthService;
use ag_core::services::registration::{AvatarStorage, RegistrationService};
use ag_core::services::token::TokenService;

/// Shared application state injected into every handler
pub struct AppState<U, R, A>
where
    U: UserRepository,
    R: RoleRepository,
    A: AvatarStorage,
{
    /// Credential authentication and token refresh
    pub auth_service: Arc<AuthService<U>>,
    /// Registration and role orchestration
    pub registration_service: Arc<RegistrationService<U, R, A>>,
    /// Token validation for the auth middleware
    pub token_service: Arc<TokenService>,
}
