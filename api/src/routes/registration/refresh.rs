use actix_web::{web, HttpResponse};
use validator::Validate;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::AvatarStorage;
use ag_shared::types::response::{AuthenticationContent, MainResponse};

use crate::dto::auth_dto::RefreshTokenRequest;
use crate::handlers::error_handler::refresh_error_response;

use super::AppState;

/// Handler for POST /RefreshToken
///
/// Exchanges an expired access token plus its paired refresh token for a
/// new pair. The access token only needs an intact signature; its
/// lifetime is not checked here. Each successful call rotates the refresh
/// token, so the presented one is single-use.
///
/// # Request Body
///
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "base64-opaque-value"
/// }
/// ```
///
/// # Responses
/// - 200 OK: `MainResponse` with a new access and refresh token
/// - 400 Bad Request: `MainResponse` with an error message
pub async fn refresh_token<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    A: AvatarStorage + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(MainResponse::error("Invalid request"));
    }

    match state
        .auth_service
        .refresh(&request.access_token, &request.refresh_token)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(MainResponse::success(AuthenticationContent {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })),
        Err(error) => refresh_error_response(error),
    }
}
