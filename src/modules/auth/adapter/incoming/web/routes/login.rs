use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_response;
use crate::api::schemas::{ErrorResponse, SessionResponse};
use crate::auth::application::use_cases::login::{LoginError, LoginRequest};
use crate::config::AppConfig;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation-only body shape; the handler deserializes into the
/// validated [`LoginRequest`] directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct LoginBody {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123")]
    pub password: String,
}

/// Log in
///
/// Authenticates by email and password; answers with a session token in
/// the body and in the `jwt` cookie.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 401, description = "Bad credentials, unverified or deactivated account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let request = req.into_inner();
    info!(email = %request.email(), "Login attempt");

    match data.login_use_case.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            session_response(session, &config)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: bad credentials");
            ApiResponse::not_authorized("Incorrect email or password")
        }
        Err(LoginError::AccountDeactivated) => {
            warn!("Login failed: deactivated account");
            ApiResponse::not_authorized(
                "Your account has been deactivated. Please contact support.",
            )
        }
        Err(LoginError::EmailNotVerified) => {
            warn!("Login failed: email not verified");
            ApiResponse::not_authorized("Please verify your email to log in.")
        }
        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
