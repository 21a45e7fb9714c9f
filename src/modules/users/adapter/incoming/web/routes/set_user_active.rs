use actix_web::{patch, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, UserDto};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::set_user_active::SetUserActiveError;
use crate::AppState;

/// Deactivate an account (admin)
///
/// Soft flag only; the account disappears from default queries.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{username}/deactivate",
    tag = "users",
    params(("username" = String, Path, description = "Unique username")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Deactivated user"),
        (status = 400, description = "No user with that username", body = ErrorResponse),
        (status = 401, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/v1/users/{username}/deactivate")]
pub async fn deactivate_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_active(auth, path.into_inner(), false, &data).await
}

/// Reactivate an account (admin)
#[utoipa::path(
    patch,
    path = "/api/v1/users/{username}/activate",
    tag = "users",
    params(("username" = String, Path, description = "Unique username")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Reactivated user"),
        (status = 400, description = "No user with that username", body = ErrorResponse),
        (status = 401, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/v1/users/{username}/activate")]
pub async fn activate_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_active(auth, path.into_inner(), true, &data).await
}

async fn set_active(
    auth: AuthenticatedUser,
    username: String,
    active: bool,
    data: &web::Data<AppState>,
) -> impl Responder {
    match data
        .set_user_active_use_case
        .execute(auth.user_id, &username, active)
        .await
    {
        Ok(user) => {
            info!(username = %user.username, active, "Account activation flag changed");
            ApiResponse::success(UserDto::from(user))
        }
        Err(SetUserActiveError::NotAuthorized) => {
            ApiResponse::not_authorized("You do not have permission to perform this action")
        }
        Err(SetUserActiveError::UserNotFound) => {
            ApiResponse::bad_request("No user found with that username")
        }
        Err(SetUserActiveError::RepositoryError(ref e)) => {
            error!(error = %e, "Activation flag update failed");
            ApiResponse::internal_error()
        }
    }
}
