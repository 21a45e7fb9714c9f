use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::fetch_partner_child::FetchPartnerChildError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one child the caller co-parents
#[utoipa::path(
    get,
    path = "/api/v1/children/{childId}/partners/partner-child",
    tag = "partners",
    params(("childId" = Uuid, Path, description = "Child id")),
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Child profile", body = ChildDto),
        (status = 400, description = "Caller is not this child's partner parent", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/children/{child_id}/partners/partner-child")]
pub async fn fetch_partner_child_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_partner_child_use_case
        .execute(auth.user_id, path.into_inner())
        .await
    {
        Ok(child) => ApiResponse::success(ChildDto::from(child)),
        Err(FetchPartnerChildError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(FetchPartnerChildError::QueryError(ref e)) => {
            error!(error = %e, "Partner child lookup failed");
            ApiResponse::internal_error()
        }
    }
}
