use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_response;
use crate::api::schemas::{ErrorResponse, SessionResponse};
use crate::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordRequest,
};
use crate::config::AppConfig;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation-only body shape; the handler deserializes into the
/// validated [`ResetPasswordRequest`] directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct ResetPasswordBody {
    /// Raw reset token from the emailed link
    pub token: String,
    #[schema(example = "NewSecurePass1")]
    pub password: String,
    #[schema(example = "NewSecurePass1")]
    pub confirm_password: String,
}

/// Reset a forgotten password
///
/// Consumes the reset token, stores the new password and opens a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordBody,
    responses(
        (status = 200, description = "Password reset, session opened", body = SessionResponse),
        (status = 400, description = "Token invalid, expired or already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    match data.reset_password_use_case.execute(req.into_inner()).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Password reset");
            session_response(session, &config)
        }
        Err(ResetPasswordError::InvalidOrExpiredToken) => {
            warn!("Password reset failed: bad token");
            ApiResponse::bad_request("Token is invalid or has expired")
        }
        Err(ResetPasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        Err(ResetPasswordError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(ResetPasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Password reset repository failure");
            ApiResponse::internal_error()
        }
    }
}
