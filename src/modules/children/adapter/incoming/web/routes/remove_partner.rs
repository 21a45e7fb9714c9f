use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::remove_partner::RemovePartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Detach the partner parent from a child
///
/// Owner only. Clears the attachment and strips the materialized pair from
/// both users.
#[utoipa::path(
    delete,
    path = "/api/v1/children/{childId}/partners/{partnerId}/remove",
    tag = "partners",
    params(
        ("childId" = Uuid, Path, description = "Child id"),
        ("partnerId" = Uuid, Path, description = "Partner parent id"),
    ),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Partner detached"),
        (status = 400, description = "No such child or no partner attached", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/children/{child_id}/partners/{partner_id}/remove")]
pub async fn remove_partner_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    // The partner id in the path is advisory; the stored attachment on the
    // child decides who gets detached.
    let (child_id, _partner_id) = path.into_inner();
    match data
        .remove_partner_use_case
        .execute(auth.user_id, child_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(RemovePartnerError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(RemovePartnerError::NoPartnerAttached) => {
            ApiResponse::bad_request("This child has no partner parent attached")
        }
        Err(RemovePartnerError::RepositoryError(ref e)) => {
            error!(error = %e, "Partner removal failed");
            ApiResponse::internal_error()
        }
    }
}
