use actix_web::{web, HttpResponse};
use validator::Validate;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::AvatarStorage;
use ag_shared::types::response::{AuthenticationContent, MainResponse};

use crate::dto::auth_dto::AuthenticateUserRequest;
use crate::handlers::error_handler::authenticate_error_response;

use super::AppState;

/// Handler for POST /AuthenticateUser
///
/// Verifies a username/password pair and issues a fresh token pair. The
/// new refresh token replaces any previously stored one, so a successful
/// login invalidates earlier sessions' refresh tokens.
///
/// # Request Body
///
/// ```json
/// {
///     "userName": "a@x.com",
///     "password": "P@ss1234"
/// }
/// ```
///
/// # Responses
/// - 200 OK: `MainResponse` with access and refresh tokens
/// - 401 Unauthorized: unknown user or wrong password, no body
pub async fn authenticate_user<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<AuthenticateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    A: AvatarStorage + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match state
        .auth_service
        .authenticate(&request.user_name, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(MainResponse::success(AuthenticationContent {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })),
        Err(error) => authenticate_error_response(error),
    }
}
