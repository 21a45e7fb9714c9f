use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_response;
use crate::api::schemas::{ErrorResponse, SessionResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::update_password::{
    UpdatePasswordError, UpdatePasswordRequest,
};
use crate::config::AppConfig;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation-only body shape; the handler deserializes into the
/// validated [`UpdatePasswordRequest`] directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdatePasswordBody {
    #[schema(example = "OldSecurePass1")]
    pub current_password: String,
    #[schema(example = "NewSecurePass1")]
    pub new_password: String,
    #[schema(example = "NewSecurePass1")]
    pub confirm_password: String,
}

/// Change the password of the logged-in user
#[utoipa::path(
    post,
    path = "/api/v1/auth/update-password",
    tag = "auth",
    request_body = UpdatePasswordBody,
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Password changed, fresh session opened", body = SessionResponse),
        (status = 401, description = "Not logged in or wrong current password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/update-password")]
pub async fn update_password_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdatePasswordRequest>,
    data: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    match data
        .update_password_use_case
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(session) => {
            info!(user_id = %session.user.id, "Password updated");
            session_response(session, &config)
        }
        Err(UpdatePasswordError::WrongCurrentPassword) => {
            warn!(user_id = %user.user_id, "Password update failed: wrong current password");
            ApiResponse::not_authorized("Your current password is wrong")
        }
        Err(UpdatePasswordError::UserNotFound) => {
            ApiResponse::not_authorized("The user belonging to this session no longer exists")
        }
        Err(UpdatePasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        Err(UpdatePasswordError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(UpdatePasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Password update repository failure");
            ApiResponse::internal_error()
        }
    }
}
