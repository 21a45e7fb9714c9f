use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::resend_partner::ResendPartnerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ResendPartnerBody {
    #[schema(example = "bo@example.com")]
    pub email: String,
}

/// Re-send a pending partner invitation
///
/// Owner only. The stored invitation is left untouched; the same link is
/// mailed again.
#[utoipa::path(
    post,
    path = "/api/v1/children/{id}/partners/resend-partner",
    tag = "partners",
    params(("id" = Uuid, Path, description = "Child id")),
    request_body = ResendPartnerBody,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Invitation mailed again"),
        (status = 400, description = "No pending invitation for that email", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children/{id}/partners/resend-partner")]
pub async fn resend_partner_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ResendPartnerBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resend_partner_use_case
        .execute(auth.user_id, path.into_inner(), &req.email)
        .await
    {
        Ok(()) => ApiResponse::message("Invitation email sent again"),
        Err(ResendPartnerError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(ResendPartnerError::UserNotFound) => ApiResponse::not_authorized(
            "The user belonging to this session no longer exists",
        ),
        Err(ResendPartnerError::NoPendingInvitation) => {
            ApiResponse::bad_request("No pending partner request for that email")
        }
        Err(ResendPartnerError::EmailDeliveryFailed) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "There was an error sending the email. Try again later!",
        ),
        Err(ResendPartnerError::RepositoryError(ref e)) => {
            error!(error = %e, "Invitation resend failed");
            ApiResponse::internal_error()
        }
    }
}
