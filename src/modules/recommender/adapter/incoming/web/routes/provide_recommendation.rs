use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::recommender::application::use_cases::provide_recommendation::ProvideRecommendationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ProvideRecommendationBody {
    /// Feature vector forwarded verbatim to the engine.
    pub input: Value,
}

/// Get a recommendation from the engine
///
/// Stateless pass-through; use the child history endpoints to persist the
/// result.
#[utoipa::path(
    post,
    path = "/provide-recommendation",
    tag = "recommender",
    request_body = ProvideRecommendationBody,
    responses(
        (status = 200, description = "Engine reply"),
        (status = 500, description = "Engine unreachable", body = ErrorResponse),
    )
)]
#[post("/provide-recommendation")]
pub async fn provide_recommendation_handler(
    req: web::Json<ProvideRecommendationBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .provide_recommendation_use_case
        .execute(req.into_inner().input)
        .await
    {
        Ok(reply) => ApiResponse::success(reply),
        Err(ProvideRecommendationError::EngineUnavailable(ref e)) => {
            error!(error = %e, "Recommendation engine call failed");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Error connecting to the recommendation engine",
            )
        }
    }
}
