use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use ag_core::services::auth::AuthService;
use ag_core::services::registration::{PasswordPolicy, RegistrationService};
use ag_core::services::token::{TokenService, TokenServiceConfig};
use ag_infra::{DatabasePool, FilesystemAvatarStorage, MySqlRoleRepository, MySqlUserRepository};

use ag_api::app;
use ag_api::config::Config;
use ag_api::middleware::cors::create_cors;
use ag_api::routes::registration::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthGate API Server");

    // Load configuration
    let config = Config::from_env();
    if config.is_production() && config.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is unset; running production with the development signing key");
    }

    // Initialize database connections
    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    pool.health_check()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!("Database connection established");

    // Create repository and storage implementations
    let user_repository = Arc::new(MySqlUserRepository::new(pool.pool().clone()));
    let role_repository = Arc::new(MySqlRoleRepository::new(pool.pool().clone()));
    let avatar_storage = Arc::new(FilesystemAvatarStorage::new(&config.storage.upload_root));

    // Wire the services together
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(config.jwt.clone())));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        user_repository,
        role_repository,
        avatar_storage,
        PasswordPolicy::default(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        registration_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(app::configure(app_state.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
