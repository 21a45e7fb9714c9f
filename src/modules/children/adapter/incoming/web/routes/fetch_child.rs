use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ChildDetailsDto, ChildDto, ErrorResponse, UserSummaryDto};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::fetch_child::FetchChildError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one of the caller's children
///
/// Embeds identity summaries for both attached parents.
#[utoipa::path(
    get,
    path = "/api/v1/children/{id}",
    tag = "children",
    params(("id" = Uuid, Path, description = "Child id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Child profile", body = ChildDetailsDto),
        (status = 400, description = "No such child for this parent", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/children/{id}")]
pub async fn fetch_child_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_child_use_case
        .execute(auth.user_id, path.into_inner())
        .await
    {
        Ok(details) => ApiResponse::success(ChildDetailsDto {
            child: ChildDto::from(details.child),
            parent: details.parent.map(UserSummaryDto::from),
            partner_parent: details.partner_parent.map(UserSummaryDto::from),
        }),
        Err(FetchChildError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(FetchChildError::QueryError(ref e)) => {
            error!(error = %e, "Child lookup failed");
            ApiResponse::internal_error()
        }
    }
}
