use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::fetch_partner_children::FetchPartnerChildrenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List children the caller co-parents
///
/// The partner-parent view of children owned by someone else.
#[utoipa::path(
    get,
    path = "/api/v1/children/partners/partner-children",
    tag = "partners",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Children the caller co-parents", body = [ChildDto]),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/children/partners/partner-children")]
pub async fn fetch_partner_children_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_partner_children_use_case
        .execute(auth.user_id)
        .await
    {
        Ok(children) => {
            ApiResponse::list(children.into_iter().map(ChildDto::from).collect())
        }
        Err(FetchPartnerChildrenError::QueryError(ref e)) => {
            error!(error = %e, "Partner children listing failed");
            ApiResponse::internal_error()
        }
    }
}
