use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::delete_all_recommendations::DeleteAllRecommendationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Wipe a child's recommendation history
///
/// Owner only.
#[utoipa::path(
    delete,
    path = "/api/v1/children/{id}/delete-all-recommendations",
    tag = "recommendations",
    params(("id" = Uuid, Path, description = "Child id")),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "History wiped"),
        (status = 400, description = "No such child for this parent", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/children/{id}/delete-all-recommendations")]
pub async fn delete_all_recommendations_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_all_recommendations_use_case
        .execute(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteAllRecommendationsError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(DeleteAllRecommendationsError::RepositoryError(ref e)) => {
            error!(error = %e, "Recommendation history wipe failed");
            ApiResponse::internal_error()
        }
    }
}
