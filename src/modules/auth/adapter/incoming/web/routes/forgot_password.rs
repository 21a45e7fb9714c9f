use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::forgot_password::ForgotPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordBody {
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Request a password reset link
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordBody,
    responses(
        (status = 200, description = "Reset token sent"),
        (status = 400, description = "Unknown email", body = ErrorResponse),
        (status = 500, description = "Email delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.forgot_password_use_case.execute(&req.email).await {
        Ok(_) => ApiResponse::accepted_message("Token sent to email!"),
        Err(ForgotPasswordError::UnknownEmail) => {
            warn!("Forgot password failed: unknown email");
            ApiResponse::bad_request("There is no user with that email address")
        }
        Err(ForgotPasswordError::EmailDeliveryFailed(ref e)) => {
            error!(error = %e, "Password reset email delivery failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an error sending the email. Try again later!",
            )
        }
        Err(ForgotPasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Forgot password repository failure");
            ApiResponse::internal_error()
        }
    }
}
