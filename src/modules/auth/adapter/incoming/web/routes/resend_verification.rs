use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::resend_verification::ResendVerificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ResendVerificationBody {
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Resend the verification email
#[utoipa::path(
    post,
    path = "/api/v1/auth/resend-email-verification",
    tag = "auth",
    request_body = ResendVerificationBody,
    responses(
        (status = 200, description = "Verification email sent"),
        (status = 400, description = "Unknown email or already verified", body = ErrorResponse),
        (status = 500, description = "Email delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/resend-email-verification")]
pub async fn resend_verification_handler(
    req: web::Json<ResendVerificationBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resend_verification_use_case.execute(&req.email).await {
        Ok(email) => {
            ApiResponse::accepted_message(&format!("Verification email sent to {}", email))
        }
        Err(ResendVerificationError::UnknownEmail) => {
            warn!("Resend verification failed: unknown email");
            ApiResponse::bad_request("There is no user with that email address")
        }
        Err(ResendVerificationError::AlreadyVerified) => {
            ApiResponse::bad_request("This account is already verified")
        }
        Err(ResendVerificationError::EmailDeliveryFailed(ref e)) => {
            error!(error = %e, "Verification email delivery failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an error sending the email. Try again later!",
            )
        }
        Err(ResendVerificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Resend verification repository failure");
            ApiResponse::internal_error()
        }
    }
}
