use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ChildDto, ErrorResponse, UserDto, UserWithChildrenDto};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::fetch_user::FetchUserError;
use crate::AppState;

/// Get a user with their children
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile with owned children"),
        (status = 400, description = "No user with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{id}")]
pub async fn fetch_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_use_case.execute(path.into_inner()).await {
        Ok(found) => ApiResponse::success(UserWithChildrenDto {
            user: UserDto::from(found.user),
            children: found.children.into_iter().map(ChildDto::from).collect(),
        }),
        Err(FetchUserError::UserNotFound) => {
            ApiResponse::bad_request("No user found with that ID")
        }
        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::internal_error()
        }
    }
}
