use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, RecommendationDto};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::add_recommendation::{
    AddRecommendationError, AddRecommendationRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct AddRecommendationBody {
    #[schema(example = "More outdoor play")]
    pub recommendation: String,
    #[schema(example = json!([1.0, 0.0, 3.0, 2.0, 1.0, 0.0, 4.0, 2.0, 1.0, 3.0]))]
    pub inputs: Vec<f64>,
    pub description: Option<String>,
}

/// Record a recommendation for a child
///
/// Owner only. Inputs must hold exactly 10 numbers.
#[utoipa::path(
    post,
    path = "/api/v1/children/{id}/add-recommendation",
    tag = "recommendations",
    params(("id" = Uuid, Path, description = "Child id")),
    request_body = AddRecommendationBody,
    security(("session_token" = [])),
    responses(
        (status = 201, description = "Recommendation recorded", body = RecommendationDto),
        (status = 400, description = "Validation failed or no such child", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/children/{id}/add-recommendation")]
pub async fn add_recommendation_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddRecommendationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .add_recommendation_use_case
        .execute(auth.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(entry) => ApiResponse::created(RecommendationDto::from(entry)),
        Err(AddRecommendationError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(AddRecommendationError::RepositoryError(ref e)) => {
            error!(error = %e, "Recommendation insert failed");
            ApiResponse::internal_error()
        }
    }
}
