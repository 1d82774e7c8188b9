use actix_web::{web, HttpResponse};
use validator::Validate;

use ag_core::repositories::{RoleRepository, UserRepository};
use ag_core::services::registration::AvatarStorage;

use crate::dto::registration_dto::CreateRoleRequest;
use crate::handlers::error_handler::role_error_response;

use super::AppState;

/// Handler for POST /CreateRole
///
/// Creates a new role. Requires a valid bearer access token. Duplicate
/// role names are rejected, not merged.
///
/// # Request Body
///
/// ```json
/// {
///     "roleName": "Admin"
/// }
/// ```
///
/// # Responses
/// - 200 OK: the string "New Role Created"
/// - 400 Bad Request: store errors as code+description pairs
/// - 401 Unauthorized: missing or invalid bearer token
pub async fn create_role<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<CreateRoleRequest>,
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
        .create_role(&request.role_name)
        .await
    {
        Ok(_) => HttpResponse::Ok().json("New Role Created"),
        Err(error) => role_error_response(error),
    }
}
