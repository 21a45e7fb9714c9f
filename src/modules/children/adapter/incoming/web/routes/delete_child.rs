use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::delete_child::DeleteChildError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a child profile
///
/// Owner only. Invitation and recommendation rows go with it.
#[utoipa::path(
    delete,
    path = "/api/v1/children/{id}",
    tag = "children",
    params(("id" = Uuid, Path, description = "Child id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Child profile deleted"),
        (status = 400, description = "No such child for this parent", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/children/{id}")]
pub async fn delete_child_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_child_use_case
        .execute(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteChildError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(DeleteChildError::RepositoryError(ref e)) => {
            error!(error = %e, "Child deletion failed");
            ApiResponse::internal_error()
        }
    }
}
