use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::schemas::{
    ChildDetailsDto, ChildDto, ErrorResponse, PartnerRequestDto, RecommendationDto,
    SessionResponse, SessionUserData, UserDto, UserSummaryDto, UserWithChildrenDto,
};

use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordBody, LoginBody, ResendVerificationBody, ResetPasswordBody, SignupBody,
    UpdatePasswordBody, VerifyEmailBody,
};
use crate::children::adapter::incoming::web::routes::{
    AddPartnerBody, AddRecommendationBody, CreateChildBody, ResendPartnerBody, UpdateChildBody,
};
use crate::recommender::adapter::incoming::web::routes::ProvideRecommendationBody;
use crate::users::adapter::incoming::web::routes::UpdateProfileBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PathNest API",
        version = "1.0.0",
        description = "Parenting coordination backend: accounts, children, partner invitations and recommendation history",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::signup_handler,
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::verify_email_handler,
        crate::auth::adapter::incoming::web::routes::resend_verification_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::update_password_handler,

        // Users
        crate::users::adapter::incoming::web::routes::fetch_users_handler,
        crate::users::adapter::incoming::web::routes::fetch_user_handler,
        crate::users::adapter::incoming::web::routes::fetch_user_by_username_handler,
        crate::users::adapter::incoming::web::routes::update_profile_handler,
        crate::users::adapter::incoming::web::routes::deactivate_user_handler,
        crate::users::adapter::incoming::web::routes::activate_user_handler,
        crate::users::adapter::incoming::web::routes::delete_user_handler,

        // Children
        crate::children::adapter::incoming::web::routes::create_child_handler,
        crate::children::adapter::incoming::web::routes::fetch_children_handler,
        crate::children::adapter::incoming::web::routes::fetch_child_handler,
        crate::children::adapter::incoming::web::routes::update_child_handler,
        crate::children::adapter::incoming::web::routes::delete_child_handler,

        // Partners
        crate::children::adapter::incoming::web::routes::add_partner_handler,
        crate::children::adapter::incoming::web::routes::accept_partner_handler,
        crate::children::adapter::incoming::web::routes::reject_partner_handler,
        crate::children::adapter::incoming::web::routes::resend_partner_handler,
        crate::children::adapter::incoming::web::routes::remove_partner_handler,
        crate::children::adapter::incoming::web::routes::fetch_partner_children_handler,
        crate::children::adapter::incoming::web::routes::fetch_partner_child_handler,

        // Recommendations
        crate::children::adapter::incoming::web::routes::add_recommendation_handler,
        crate::children::adapter::incoming::web::routes::delete_recommendation_handler,
        crate::children::adapter::incoming::web::routes::delete_all_recommendations_handler,

        // Recommender proxy
        crate::recommender::adapter::incoming::web::routes::provide_recommendation_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            SessionResponse,
            SessionUserData,
            UserDto,
            UserSummaryDto,
            UserWithChildrenDto,
            ChildDto,
            ChildDetailsDto,
            PartnerRequestDto,
            RecommendationDto,

            SignupBody,
            LoginBody,
            VerifyEmailBody,
            ResendVerificationBody,
            ForgotPasswordBody,
            ResetPasswordBody,
            UpdatePasswordBody,
            UpdateProfileBody,
            CreateChildBody,
            UpdateChildBody,
            AddPartnerBody,
            ResendPartnerBody,
            AddRecommendationBody,
            ProvideRecommendationBody,
        )
    ),
    modifiers(&SessionTokenSecurity),
    tags(
        (name = "auth", description = "Signup, login and credential recovery"),
        (name = "users", description = "Account administration and profiles"),
        (name = "children", description = "Child profile CRUD"),
        (name = "partners", description = "Partner invitation state machine"),
        (name = "recommendations", description = "Per-child recommendation history"),
        (name = "recommender", description = "Pass-through to the recommendation engine"),
    )
)]
pub struct ApiDoc;

/// Session tokens are bearer JWTs; the `jwt` cookie works too but the
/// documented scheme is the Authorization header.
pub struct SessionTokenSecurity;

impl Modify for SessionTokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
