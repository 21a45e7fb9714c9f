use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::signup::{SignupError, SignupRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation-only body shape; the handler deserializes into the
/// validated [`SignupRequest`] directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct SignupBody {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123")]
    pub password: String,
    #[schema(example = "SecurePass123")]
    pub confirm_password: String,
}

/// Register a new account
///
/// Creates the account unverified and emails a verification link.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = "auth",
    request_body = SignupBody,
    responses(
        (status = 200, description = "Account created, verification email sent"),
        (status = 400, description = "Validation failure or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    info!(email = %request.email(), "Signup attempt");

    match data.signup_use_case.execute(request).await {
        Ok(email) => {
            info!(email = %email, "Account created");
            ApiResponse::accepted_message(&format!("Verification email sent to {}", email))
        }
        Err(SignupError::EmailTaken) => {
            ApiResponse::bad_request("Email address already in use")
        }
        Err(SignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        Err(SignupError::RepositoryError(ref e)) => {
            error!(error = %e, "Signup repository failure");
            ApiResponse::internal_error()
        }
    }
}
