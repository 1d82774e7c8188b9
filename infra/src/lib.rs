//! # AuthGate Infrastructure
//!
//! Infrastructure layer implementations for the AuthGate backend:
//! - MySQL repositories behind the core credential-store traits
//! - Database connection pool management
//! - Filesystem avatar storage

pub mod database;
pub mod storage;

use thiserror::Error;

/// Infrastructure-level errors
///
/// Raised while wiring external resources at startup; runtime repository
/// failures surface as `ag_core::DomainError` instead.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlRoleRepository, MySqlUserRepository};
pub use storage::FilesystemAvatarStorage;
