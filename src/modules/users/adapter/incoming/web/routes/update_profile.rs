use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, UserDto};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileRequest,
};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdateProfileBody {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane_doe_4f6a8b2c1d3e")]
    pub username: Option<String>,
    #[schema(example = "female")]
    pub gender: Option<String>,
    pub bio: Option<String>,
}

/// Update the caller's profile
///
/// Renaming re-derives the profile slug.
#[utoipa::path(
    patch,
    path = "/api/v1/users/update-user",
    tag = "users",
    request_body = UpdateProfileBody,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Nothing to update or username taken", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/v1/users/update-user")]
pub async fn update_profile_handler(
    auth: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_profile_use_case
        .execute(auth.user_id, req.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success(UserDto::from(user)),
        Err(UpdateProfileError::NothingToUpdate) => {
            ApiResponse::bad_request("No profile fields provided")
        }
        Err(UpdateProfileError::EmptyName) => ApiResponse::bad_request("Name cannot be empty"),
        Err(UpdateProfileError::UsernameTaken) => {
            ApiResponse::bad_request("Username already in use")
        }
        Err(UpdateProfileError::UserNotFound) => ApiResponse::not_authorized(
            "The user belonging to this session no longer exists",
        ),
        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
