use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::delete_user::DeleteUserError;
use crate::AppState;

/// Delete an account (admin)
///
/// Hard delete; the account's children go with it.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "No user with that id", body = ErrorResponse),
        (status = 401, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/users/{id}")]
pub async fn delete_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    match data
        .delete_user_use_case
        .execute(auth.user_id, user_id)
        .await
    {
        Ok(()) => {
            info!(%user_id, "Account deleted");
            ApiResponse::no_content()
        }
        Err(DeleteUserError::NotAuthorized) => {
            ApiResponse::not_authorized("You do not have permission to perform this action")
        }
        Err(DeleteUserError::UserNotFound) => ApiResponse::bad_request("No user found with that ID"),
        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
