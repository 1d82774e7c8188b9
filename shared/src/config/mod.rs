//! Configuration types for the AuthGate server
//!
//! All configuration is environment-driven and loaded once at startup.
//! The structs here are plain data; assembly from the process environment
//! happens in the API crate.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{ServerConfig, StorageConfig};
