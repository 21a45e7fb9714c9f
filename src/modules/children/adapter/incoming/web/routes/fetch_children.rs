use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::fetch_children::FetchChildrenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's children
#[utoipa::path(
    get,
    path = "/api/v1/children",
    tag = "children",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Children owned by the caller", body = [ChildDto]),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/children")]
pub async fn fetch_children_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_children_use_case.execute(auth.user_id).await {
        Ok(children) => {
            ApiResponse::list(children.into_iter().map(ChildDto::from).collect())
        }
        Err(FetchChildrenError::QueryError(ref e)) => {
            error!(error = %e, "Children listing failed");
            ApiResponse::internal_error()
        }
    }
}
