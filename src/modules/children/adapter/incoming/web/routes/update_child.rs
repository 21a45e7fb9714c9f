use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ChildDto, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::update_child::{
    UpdateChildError, UpdateChildRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdateChildBody {
    #[schema(example = "Milo")]
    pub name: Option<String>,
    pub nickname: Option<String>,
    #[schema(example = "2020-06-15")]
    pub dob: Option<String>,
    #[schema(example = "male")]
    pub gender: Option<String>,
}

/// Update a child profile
///
/// Owner only. Renaming re-derives the profile slug.
#[utoipa::path(
    patch,
    path = "/api/v1/children/{id}",
    tag = "children",
    params(("id" = Uuid, Path, description = "Child id")),
    request_body = UpdateChildBody,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Updated child profile", body = ChildDto),
        (status = 400, description = "Nothing to update or no such child", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/v1/children/{id}")]
pub async fn update_child_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateChildRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_child_use_case
        .execute(auth.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(child) => ApiResponse::success(ChildDto::from(child)),
        Err(UpdateChildError::NothingToUpdate) => {
            ApiResponse::bad_request("No child fields provided")
        }
        Err(UpdateChildError::InvalidName) => ApiResponse::bad_request("Name cannot be empty"),
        Err(UpdateChildError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(UpdateChildError::RepositoryError(ref e)) => {
            error!(error = %e, "Child update failed");
            ApiResponse::internal_error()
        }
    }
}
