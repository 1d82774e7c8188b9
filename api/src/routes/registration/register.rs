use actix_web::{web, HttpResponse};
use validator::Validate;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::{AvatarStorage, NewUser};
use ag_shared::types::response::MainResponse;

use crate::dto::registration_dto::RegisterUserRequest;
use crate::handlers::error_handler::register_error_response;

use super::AppState;

/// Handler for POST /RegisterUser
///
/// Creates a new user account. The password policy is enforced by the
/// credential store; violations and a duplicate email come back as a
/// joined "code: description" string. An optional base64 avatar payload
/// is decoded and stored before the account is created.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@x.com",
///     "firstName": "Ada",
///     "lastName": "Lovelace",
///     "password": "P@ss1234",
///     "address": "12 Analytical St",
///     "gender": "female",
///     "userAvatar": "base64-image-payload"
/// }
/// ```
///
/// # Responses
/// - 200 OK: `MainResponse` with `isSuccess: true`
/// - 400 Bad Request: validation details, or the joined store errors
pub async fn register_user<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<RegisterUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    A: AvatarStorage + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    let request = request.into_inner();
    let new_user = NewUser {
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        password: request.password,
        address: request.address,
        gender: request.gender,
        avatar: request.user_avatar,
    };

    match state.registration_service.register_user(new_user).await {
        Ok(_) => HttpResponse::Ok().json(MainResponse::success_empty()),
        Err(error) => register_error_response(error),
    }
}
