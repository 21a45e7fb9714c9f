use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, UserDto};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::fetch_user_by_username::FetchUserByUsernameError;
use crate::AppState;

/// Get a user by username
#[utoipa::path(
    get,
    path = "/api/v1/users/username/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Unique username")),
    responses(
        (status = 200, description = "User profile"),
        (status = 400, description = "No user with that username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/username/{username}")]
pub async fn fetch_user_by_username_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_user_by_username_use_case
        .execute(&path.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success(UserDto::from(user)),
        Err(FetchUserByUsernameError::UserNotFound) => {
            ApiResponse::bad_request("No user found with that username")
        }
        Err(FetchUserByUsernameError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::internal_error()
        }
    }
}
