use actix_web::{web, HttpResponse};
use validator::Validate;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::AvatarStorage;

use crate::dto::registration_dto::AssignRoleToUserRequest;
use crate::handlers::error_handler::role_error_response;

use super::AppState;

/// Handler for POST /AssignRoleToUser
///
/// Adds the user registered under the given email to a role. Requires a
/// valid bearer access token. A missing user is a domain failure with a
/// "no user" message; store-level failures (unknown role, already a
/// member) are surfaced verbatim.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@x.com",
///     "roleName": "Admin"
/// }
/// ```
///
/// # Responses
/// - 200 OK: confirmation string naming the role
/// - 400 Bad Request: store errors, or the "no user" message
/// - 401 Unauthorized: missing or invalid bearer token
pub async fn assign_role_to_user<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<AssignRoleToUserRequest>,
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
        .registration_service
        .assign_role(&request.email, &request.role_name)
        .await
    {
        Ok(()) => HttpResponse::Ok()
            .json(format!("Role Assigned to User: {}", request.role_name)),
        Err(error) => role_error_response(error),
    }
}
