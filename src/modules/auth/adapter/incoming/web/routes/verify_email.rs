use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_response;
use crate::api::schemas::{ErrorResponse, SessionResponse};
use crate::auth::application::use_cases::verify_email::VerifyEmailError;
use crate::config::AppConfig;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct VerifyEmailBody {
    /// Raw verification token from the emailed link
    pub token: String,
}

/// Verify an email address
///
/// Consumes the emailed token, marks the account verified and opens a
/// session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/email-verification",
    tag = "auth",
    request_body = VerifyEmailBody,
    responses(
        (status = 200, description = "Email verified, session opened", body = SessionResponse),
        (status = 400, description = "Token invalid, expired or already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/email-verification")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailBody>,
    data: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    match data.verify_email_use_case.execute(&req.token).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Email verified");
            session_response(session, &config)
        }
        Err(VerifyEmailError::InvalidOrExpiredToken) => {
            warn!("Email verification failed: bad token");
            ApiResponse::bad_request("Token is invalid or has expired")
        }
        Err(VerifyEmailError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(VerifyEmailError::RepositoryError(ref e)) => {
            error!(error = %e, "Email verification repository failure");
            ApiResponse::internal_error()
        }
    }
}
