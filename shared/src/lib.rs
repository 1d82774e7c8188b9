//! Shared utilities and common types for the AuthGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Utility functions (input validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, JwtConfig, ServerConfig, StorageConfig};
pub use types::{AuthenticationContent, MainResponse};
pub use utils::validation;
