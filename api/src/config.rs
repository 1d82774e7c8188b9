//! Application configuration assembly
//!
//! Pulls the typed configuration sections out of the process environment
//! once at startup; nothing here is mutated afterwards.

use ag_shared::config::{
    auth::JwtConfig, database::DatabaseConfig, environment::Environment, server::ServerConfig,
    server::StorageConfig,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            environment: Environment::from_env(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
