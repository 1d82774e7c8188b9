//! Application route configuration
//!
//! Builds the endpoint table from an already-wired state. The returned
//! closure plugs into `App::configure`, so the server binary and the
//! integration tests assemble the same application.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::middleware::auth::JwtAuth;
use crate::routes::registration::{
    assign_role::assign_role_to_user, authenticate::authenticate_user, create_role::create_role,
    refresh::refresh_token, register::register_user, AppState,
};

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::AvatarStorage;

/// Configure the application routes and state
pub fn configure<U, R, A>(
    app_state: web::Data<AppState<U, R, A>>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    A: AvatarStorage + 'static,
{
    move |cfg| {
        let token_service = Arc::clone(&app_state.token_service);

        cfg.app_data(app_state)
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // Anonymous endpoints
            .route("/RegisterUser", web::post().to(register_user::<U, R, A>))
            .route(
                "/AuthenticateUser",
                web::post().to(authenticate_user::<U, R, A>),
            )
            .route("/RefreshToken", web::post().to(refresh_token::<U, R, A>))
            // Role management requires a valid access token
            .route(
                "/CreateRole",
                web::post()
                    .to(create_role::<U, R, A>)
                    .wrap(JwtAuth::new(Arc::clone(&token_service))),
            )
            .route(
                "/AssignRoleToUser",
                web::post()
                    .to(assign_role_to_user::<U, R, A>)
                    .wrap(JwtAuth::new(token_service)),
            )
            // Default 404 handler
            .default_service(web::route().to(not_found));
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authgate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
