use actix_web::{post, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::accept_partner::AcceptPartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Accept a partner invitation
///
/// Caller must be logged in under the invited email address. A pending
/// invitation resolves at most once.
#[utoipa::path(
    post,
    path = "/api/v1/children/{childId}/partners/{requestId}/accept",
    tag = "partners",
    params(
        ("childId" = Uuid, Path, description = "Child id"),
        ("requestId" = Uuid, Path, description = "Invitation id"),
    ),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Invitation accepted", body = ChildDto),
        (status = 401, description = "No matching pending invitation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children/{child_id}/partners/{request_id}/accept")]
pub async fn accept_partner_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (child_id, request_id) = path.into_inner();
    match data
        .accept_partner_use_case
        .execute(auth.user_id, &auth.email, child_id, request_id)
        .await
    {
        Ok(child) => ApiResponse::success(ChildDto::from(child)),
        Err(AcceptPartnerError::NotAuthorized) => {
            warn!("Invitation accept refused: no matching pending request");
            ApiResponse::not_authorized("You are not authorized to accept this invitation")
        }
        Err(AcceptPartnerError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(AcceptPartnerError::RepositoryError(ref e)) => {
            error!(error = %e, "Invitation accept failed");
            ApiResponse::internal_error()
        }
    }
}
