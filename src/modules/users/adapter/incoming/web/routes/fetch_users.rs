use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, UserDto};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::fetch_users::FetchUsersError;
use crate::AppState;

/// List users
///
/// Deactivated accounts are excluded.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "Active users with a results count"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn fetch_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_users_use_case.execute().await {
        Ok(users) => {
            ApiResponse::list(users.into_iter().map(UserDto::from).collect::<Vec<_>>())
        }
        Err(FetchUsersError::QueryError(ref e)) => {
            error!(error = %e, "User list query failed");
            ApiResponse::internal_error()
        }
    }
}
