use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated caller, resolved from the `jwt` cookie or, failing
/// that, a bearer Authorization header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_session_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::not_authorized(
                    "You are not logged in! Please log in to get access.",
                ))));
            }
        };

        match token_provider.verify_session_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                email: claims.email,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::not_authorized(
                "Invalid or expired session. Please log in again.",
            )))),
        }
    }
}

fn extract_session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie("jwt") {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
