mod forgot_password;
mod login;
mod resend_verification;
mod reset_password;
mod signup;
mod update_password;
mod verify_email;

pub use forgot_password::{forgot_password_handler, ForgotPasswordBody};
pub use login::{login_handler, LoginBody};
pub use resend_verification::{resend_verification_handler, ResendVerificationBody};
pub use reset_password::{reset_password_handler, ResetPasswordBody};
pub use signup::{signup_handler, SignupBody};
pub use update_password::{update_password_handler, UpdatePasswordBody};
pub use verify_email::{verify_email_handler, VerifyEmailBody};

pub use forgot_password::{__path_forgot_password_handler};
pub use login::{__path_login_handler};
pub use resend_verification::{__path_resend_verification_handler};
pub use reset_password::{__path_reset_password_handler};
pub use signup::{__path_signup_handler};
pub use update_password::{__path_update_password_handler};
pub use verify_email::{__path_verify_email_handler};

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::HttpResponse;

use crate::api::schemas::SessionResponse;
use crate::auth::application::use_cases::login::Session;
use crate::config::AppConfig;

/// Every login-like operation answers the same way: the JWT rides in an
/// HttpOnly `jwt` cookie and in the response body.
pub(crate) fn session_response(session: Session, config: &AppConfig) -> HttpResponse {
    let cookie = Cookie::build("jwt", session.token.clone())
        .path("/")
        .http_only(true)
        .secure(config.is_production())
        .max_age(CookieDuration::seconds(config.jwt_expires_secs))
        .finish();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(SessionResponse::new(session.token, session.user))
}
