use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, PartnerRequestDto};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::add_partner::{AddPartnerError, AddPartnerRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct AddPartnerBody {
    #[schema(example = "Bo Harper")]
    pub name: String,
    #[schema(example = "bo@example.com")]
    pub email: String,
}

/// Invite a co-parent for a child
///
/// Owner only. Stores a pending invitation and emails the invitee a link
/// carrying the request id.
#[utoipa::path(
    post,
    path = "/api/v1/children/{id}/partners/add-partner",
    tag = "partners",
    params(("id" = Uuid, Path, description = "Child id")),
    request_body = AddPartnerBody,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Invitation stored and mailed", body = PartnerRequestDto),
        (status = 400, description = "Invitation rule violated", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children/{id}/partners/add-partner")]
pub async fn add_partner_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddPartnerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .add_partner_use_case
        .execute(auth.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(request) => ApiResponse::created(PartnerRequestDto::from(request)),
        Err(AddPartnerError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(AddPartnerError::UserNotFound) => ApiResponse::not_authorized(
            "The user belonging to this session no longer exists",
        ),
        Err(AddPartnerError::InviteRule(ref violation)) => {
            warn!(reason = %violation, "Partner invitation refused");
            ApiResponse::bad_request(&violation.to_string())
        }
        Err(AddPartnerError::EmailDeliveryFailed) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "There was an error sending the email. Try again later!",
        ),
        Err(AddPartnerError::RepositoryError(ref e)) => {
            error!(error = %e, "Partner invitation failed");
            ApiResponse::internal_error()
        }
    }
}
