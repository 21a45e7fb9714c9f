use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::children::application::use_cases::delete_recommendation::DeleteRecommendationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one recommendation record
///
/// Owner only.
#[utoipa::path(
    delete,
    path = "/api/v1/children/{childId}/delete-recommendation/{recommendId}",
    tag = "recommendations",
    params(
        ("childId" = Uuid, Path, description = "Child id"),
        ("recommendId" = Uuid, Path, description = "Recommendation id"),
    ),
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Recommendation deleted"),
        (status = 400, description = "No such child or recommendation", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/children/{child_id}/delete-recommendation/{recommendation_id}")]
pub async fn delete_recommendation_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (child_id, recommendation_id) = path.into_inner();
    match data
        .delete_recommendation_use_case
        .execute(auth.user_id, child_id, recommendation_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteRecommendationError::ChildNotFound) => {
            ApiResponse::bad_request("No child found with that ID")
        }
        Err(DeleteRecommendationError::RecommendationNotFound) => {
            ApiResponse::bad_request("No recommendation found with that ID")
        }
        Err(DeleteRecommendationError::RepositoryError(ref e)) => {
            error!(error = %e, "Recommendation deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::children::application::use_cases::delete_recommendation::IDeleteRecommendationUseCase;
    use crate::tests::support::app_state_builder::{test_token_provider, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockMissingRecommendation;

    #[async_trait]
    impl IDeleteRecommendationUseCase for MockMissingRecommendation {
        async fn execute(
            &self,
            _parent_id: Uuid,
            _child_id: Uuid,
            _recommendation_id: Uuid,
        ) -> Result<(), DeleteRecommendationError> {
            Err(DeleteRecommendationError::RecommendationNotFound)
        }
    }

    #[actix_web::test]
    async fn test_missing_recommendation_is_a_client_error() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_recommendation(MockMissingRecommendation)
            .build();
        let provider = test_token_provider();
        let token = provider
            .generate_session_token(Uuid::new_v4(), "jane@example.com")
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(delete_recommendation_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!(
                "/api/v1/children/{}/delete-recommendation/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No recommendation found with that ID");
    }
}
