use actix_web::{post, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::reject_partner::RejectPartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reject a partner invitation
///
/// Caller must be logged in under the invited email address. The resolved
/// row is kept for history.
#[utoipa::path(
    post,
    path = "/api/v1/children/{childId}/partners/{requestId}/reject",
    tag = "partners",
    params(
        ("childId" = Uuid, Path, description = "Child id"),
        ("requestId" = Uuid, Path, description = "Invitation id"),
    ),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Invitation rejected"),
        (status = 401, description = "No matching pending invitation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children/{child_id}/partners/{request_id}/reject")]
pub async fn reject_partner_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (child_id, request_id) = path.into_inner();
    match data
        .reject_partner_use_case
        .execute(&auth.email, child_id, request_id)
        .await
    {
        Ok(_) => ApiResponse::message("Partner request rejected"),
        Err(RejectPartnerError::NotAuthorized) => {
            warn!("Invitation reject refused: no matching pending request");
            ApiResponse::not_authorized("You are not authorized to reject this invitation")
        }
        Err(RejectPartnerError::RepositoryError(ref e)) => {
            error!(error = %e, "Invitation reject failed");
            ApiResponse::internal_error()
        }
    }
}
