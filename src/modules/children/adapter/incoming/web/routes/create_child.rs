use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::create_child::{
    CreateChildError, CreateChildRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct CreateChildBody {
    #[schema(example = "Milo")]
    pub name: String,
    #[schema(example = "Mi")]
    pub nickname: Option<String>,
    #[schema(example = "2020-06-15")]
    pub dob: String,
    #[schema(example = "male")]
    pub gender: Option<String>,
}

/// Register a child profile
///
/// The caller becomes the owning parent. The profile starts with an empty
/// recommendation history and no partner parent.
#[utoipa::path(
    post,
    path = "/api/v1/children",
    tag = "children",
    request_body = CreateChildBody,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Child profile created", body = ChildDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children")]
pub async fn create_child_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateChildRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .create_child_use_case
        .execute(auth.user_id, req.into_inner())
        .await
    {
        Ok(child) => ApiResponse::created(ChildDto::from(child)),
        Err(CreateChildError::RepositoryError(ref e)) => {
            error!(error = %e, "Child creation failed");
            ApiResponse::internal_error()
        }
    }
}
