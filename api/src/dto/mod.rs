//! Request and response data transfer objects

pub mod auth_dto;
pub mod registration_dto;

pub use auth_dto::{AuthenticateUserRequest, RefreshTokenRequest};
pub use registration_dto::{AssignRoleToUserRequest, CreateRoleRequest, RegisterUserRequest};
