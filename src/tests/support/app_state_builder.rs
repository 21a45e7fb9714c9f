// Builds an AppState for handler tests. Every slot starts with an Unwired
// stub that panics when reached, so a test wires exactly the use cases its
// route exercises.
use actix_web::web;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::auth::application::use_cases::forgot_password::{
    ForgotPasswordError, IForgotPasswordUseCase,
};
use crate::auth::application::use_cases::login::{ILoginUseCase, LoginError, LoginRequest, Session};
use crate::auth::application::use_cases::resend_verification::{
    IResendVerificationUseCase, ResendVerificationError,
};
use crate::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordRequest,
};
use crate::auth::application::use_cases::signup::{ISignupUseCase, SignupError, SignupRequest};
use crate::auth::application::use_cases::update_password::{
    IUpdatePasswordUseCase, UpdatePasswordError, UpdatePasswordRequest,
};
use crate::auth::application::use_cases::verify_email::{IVerifyEmailUseCase, VerifyEmailError};
use crate::children::application::domain::entities::{Child, PartnerRequest, Recommendation};
use crate::children::application::use_cases::accept_partner::{
    AcceptPartnerError, IAcceptPartnerUseCase,
};
use crate::children::application::use_cases::add_partner::{
    AddPartnerError, AddPartnerRequest, IAddPartnerUseCase,
};
use crate::children::application::use_cases::add_recommendation::{
    AddRecommendationError, AddRecommendationRequest, IAddRecommendationUseCase,
};
use crate::children::application::use_cases::create_child::{
    CreateChildError, CreateChildRequest, ICreateChildUseCase,
};
use crate::children::application::use_cases::delete_all_recommendations::{
    DeleteAllRecommendationsError, IDeleteAllRecommendationsUseCase,
};
use crate::children::application::use_cases::delete_child::{DeleteChildError, IDeleteChildUseCase};
use crate::children::application::use_cases::delete_recommendation::{
    DeleteRecommendationError, IDeleteRecommendationUseCase,
};
use crate::children::application::use_cases::fetch_child::{
    ChildDetails, FetchChildError, IFetchChildUseCase,
};
use crate::children::application::use_cases::fetch_children::{
    FetchChildrenError, IFetchChildrenUseCase,
};
use crate::children::application::use_cases::fetch_partner_child::{
    FetchPartnerChildError, IFetchPartnerChildUseCase,
};
use crate::children::application::use_cases::fetch_partner_children::{
    FetchPartnerChildrenError, IFetchPartnerChildrenUseCase,
};
use crate::children::application::use_cases::reject_partner::{
    IRejectPartnerUseCase, RejectPartnerError,
};
use crate::children::application::use_cases::remove_partner::{
    IRemovePartnerUseCase, RemovePartnerError,
};
use crate::children::application::use_cases::resend_partner::{
    IResendPartnerUseCase, ResendPartnerError,
};
use crate::children::application::use_cases::update_child::{
    IUpdateChildUseCase, UpdateChildError, UpdateChildRequest,
};
use crate::recommender::application::use_cases::provide_recommendation::{
    IProvideRecommendationUseCase, ProvideRecommendationError,
};
use crate::users::application::domain::entities::User;
use crate::users::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::users::application::use_cases::fetch_user::{
    FetchUserError, IFetchUserUseCase, UserWithChildren,
};
use crate::users::application::use_cases::fetch_user_by_username::{
    FetchUserByUsernameError, IFetchUserByUsernameUseCase,
};
use crate::users::application::use_cases::fetch_users::{FetchUsersError, IFetchUsersUseCase};
use crate::users::application::use_cases::set_user_active::{
    ISetUserActiveUseCase, SetUserActiveError,
};
use crate::users::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileRequest,
};
use crate::AppState;

/// Token provider handlers under test share with the extractor.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtService::new(JwtConfig::new("testsecret".to_string(), 3600)))
}

struct Unwired;

#[async_trait]
impl ISignupUseCase for Unwired {
    async fn execute(&self, _request: SignupRequest) -> Result<String, SignupError> {
        unimplemented!("signup use case not wired")
    }
}

#[async_trait]
impl ILoginUseCase for Unwired {
    async fn execute(&self, _request: LoginRequest) -> Result<Session, LoginError> {
        unimplemented!("login use case not wired")
    }
}

#[async_trait]
impl IVerifyEmailUseCase for Unwired {
    async fn execute(&self, _raw_token: &str) -> Result<Session, VerifyEmailError> {
        unimplemented!("verify email use case not wired")
    }
}

#[async_trait]
impl IResendVerificationUseCase for Unwired {
    async fn execute(&self, _email: &str) -> Result<String, ResendVerificationError> {
        unimplemented!("resend verification use case not wired")
    }
}

#[async_trait]
impl IForgotPasswordUseCase for Unwired {
    async fn execute(&self, _email: &str) -> Result<String, ForgotPasswordError> {
        unimplemented!("forgot password use case not wired")
    }
}

#[async_trait]
impl IResetPasswordUseCase for Unwired {
    async fn execute(&self, _request: ResetPasswordRequest) -> Result<Session, ResetPasswordError> {
        unimplemented!("reset password use case not wired")
    }
}

#[async_trait]
impl IUpdatePasswordUseCase for Unwired {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: UpdatePasswordRequest,
    ) -> Result<Session, UpdatePasswordError> {
        unimplemented!("update password use case not wired")
    }
}

#[async_trait]
impl IFetchUsersUseCase for Unwired {
    async fn execute(&self) -> Result<Vec<User>, FetchUsersError> {
        unimplemented!("fetch users use case not wired")
    }
}

#[async_trait]
impl IFetchUserUseCase for Unwired {
    async fn execute(&self, _user_id: Uuid) -> Result<UserWithChildren, FetchUserError> {
        unimplemented!("fetch user use case not wired")
    }
}

#[async_trait]
impl IFetchUserByUsernameUseCase for Unwired {
    async fn execute(&self, _username: &str) -> Result<User, FetchUserByUsernameError> {
        unimplemented!("fetch user by username use case not wired")
    }
}

#[async_trait]
impl IUpdateProfileUseCase for Unwired {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: UpdateProfileRequest,
    ) -> Result<User, UpdateProfileError> {
        unimplemented!("update profile use case not wired")
    }
}

#[async_trait]
impl ISetUserActiveUseCase for Unwired {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _username: &str,
        _active: bool,
    ) -> Result<User, SetUserActiveError> {
        unimplemented!("set user active use case not wired")
    }
}

#[async_trait]
impl IDeleteUserUseCase for Unwired {
    async fn execute(&self, _acting_user_id: Uuid, _user_id: Uuid) -> Result<(), DeleteUserError> {
        unimplemented!("delete user use case not wired")
    }
}

#[async_trait]
impl ICreateChildUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _request: CreateChildRequest,
    ) -> Result<Child, CreateChildError> {
        unimplemented!("create child use case not wired")
    }
}

#[async_trait]
impl IFetchChildrenUseCase for Unwired {
    async fn execute(&self, _parent_id: Uuid) -> Result<Vec<Child>, FetchChildrenError> {
        unimplemented!("fetch children use case not wired")
    }
}

#[async_trait]
impl IFetchChildUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
    ) -> Result<ChildDetails, FetchChildError> {
        unimplemented!("fetch child use case not wired")
    }
}

#[async_trait]
impl IUpdateChildUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
        _request: UpdateChildRequest,
    ) -> Result<Child, UpdateChildError> {
        unimplemented!("update child use case not wired")
    }
}

#[async_trait]
impl IDeleteChildUseCase for Unwired {
    async fn execute(&self, _parent_id: Uuid, _child_id: Uuid) -> Result<(), DeleteChildError> {
        unimplemented!("delete child use case not wired")
    }
}

#[async_trait]
impl IAddPartnerUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
        _request: AddPartnerRequest,
    ) -> Result<PartnerRequest, AddPartnerError> {
        unimplemented!("add partner use case not wired")
    }
}

#[async_trait]
impl IAcceptPartnerUseCase for Unwired {
    async fn execute(
        &self,
        _acting_user_id: Uuid,
        _acting_email: &str,
        _child_id: Uuid,
        _request_id: Uuid,
    ) -> Result<Child, AcceptPartnerError> {
        unimplemented!("accept partner use case not wired")
    }
}

#[async_trait]
impl IRejectPartnerUseCase for Unwired {
    async fn execute(
        &self,
        _acting_email: &str,
        _child_id: Uuid,
        _request_id: Uuid,
    ) -> Result<PartnerRequest, RejectPartnerError> {
        unimplemented!("reject partner use case not wired")
    }
}

#[async_trait]
impl IResendPartnerUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
        _invitee_email: &str,
    ) -> Result<(), ResendPartnerError> {
        unimplemented!("resend partner use case not wired")
    }
}

#[async_trait]
impl IRemovePartnerUseCase for Unwired {
    async fn execute(&self, _parent_id: Uuid, _child_id: Uuid) -> Result<(), RemovePartnerError> {
        unimplemented!("remove partner use case not wired")
    }
}

#[async_trait]
impl IFetchPartnerChildrenUseCase for Unwired {
    async fn execute(&self, _partner_id: Uuid) -> Result<Vec<Child>, FetchPartnerChildrenError> {
        unimplemented!("fetch partner children use case not wired")
    }
}

#[async_trait]
impl IFetchPartnerChildUseCase for Unwired {
    async fn execute(
        &self,
        _partner_id: Uuid,
        _child_id: Uuid,
    ) -> Result<Child, FetchPartnerChildError> {
        unimplemented!("fetch partner child use case not wired")
    }
}

#[async_trait]
impl IAddRecommendationUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
        _request: AddRecommendationRequest,
    ) -> Result<Recommendation, AddRecommendationError> {
        unimplemented!("add recommendation use case not wired")
    }
}

#[async_trait]
impl IDeleteRecommendationUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
        _recommendation_id: Uuid,
    ) -> Result<(), DeleteRecommendationError> {
        unimplemented!("delete recommendation use case not wired")
    }
}

#[async_trait]
impl IDeleteAllRecommendationsUseCase for Unwired {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _child_id: Uuid,
    ) -> Result<(), DeleteAllRecommendationsError> {
        unimplemented!("delete all recommendations use case not wired")
    }
}

#[async_trait]
impl IProvideRecommendationUseCase for Unwired {
    async fn execute(&self, _input: Value) -> Result<Value, ProvideRecommendationError> {
        unimplemented!("provide recommendation use case not wired")
    }
}

pub struct TestAppStateBuilder {
    signup: Arc<dyn ISignupUseCase + Send + Sync>,
    login: Arc<dyn ILoginUseCase + Send + Sync>,
    verify_email: Arc<dyn IVerifyEmailUseCase + Send + Sync>,
    resend_verification: Arc<dyn IResendVerificationUseCase + Send + Sync>,
    forgot_password: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    update_password: Arc<dyn IUpdatePasswordUseCase + Send + Sync>,
    fetch_users: Arc<dyn IFetchUsersUseCase + Send + Sync>,
    fetch_user: Arc<dyn IFetchUserUseCase + Send + Sync>,
    fetch_user_by_username: Arc<dyn IFetchUserByUsernameUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    set_user_active: Arc<dyn ISetUserActiveUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    create_child: Arc<dyn ICreateChildUseCase + Send + Sync>,
    fetch_children: Arc<dyn IFetchChildrenUseCase + Send + Sync>,
    fetch_child: Arc<dyn IFetchChildUseCase + Send + Sync>,
    update_child: Arc<dyn IUpdateChildUseCase + Send + Sync>,
    delete_child: Arc<dyn IDeleteChildUseCase + Send + Sync>,
    add_partner: Arc<dyn IAddPartnerUseCase + Send + Sync>,
    accept_partner: Arc<dyn IAcceptPartnerUseCase + Send + Sync>,
    reject_partner: Arc<dyn IRejectPartnerUseCase + Send + Sync>,
    resend_partner: Arc<dyn IResendPartnerUseCase + Send + Sync>,
    remove_partner: Arc<dyn IRemovePartnerUseCase + Send + Sync>,
    fetch_partner_children: Arc<dyn IFetchPartnerChildrenUseCase + Send + Sync>,
    fetch_partner_child: Arc<dyn IFetchPartnerChildUseCase + Send + Sync>,
    add_recommendation: Arc<dyn IAddRecommendationUseCase + Send + Sync>,
    delete_recommendation: Arc<dyn IDeleteRecommendationUseCase + Send + Sync>,
    delete_all_recommendations: Arc<dyn IDeleteAllRecommendationsUseCase + Send + Sync>,
    provide_recommendation: Arc<dyn IProvideRecommendationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup: Arc::new(Unwired),
            login: Arc::new(Unwired),
            verify_email: Arc::new(Unwired),
            resend_verification: Arc::new(Unwired),
            forgot_password: Arc::new(Unwired),
            reset_password: Arc::new(Unwired),
            update_password: Arc::new(Unwired),
            fetch_users: Arc::new(Unwired),
            fetch_user: Arc::new(Unwired),
            fetch_user_by_username: Arc::new(Unwired),
            update_profile: Arc::new(Unwired),
            set_user_active: Arc::new(Unwired),
            delete_user: Arc::new(Unwired),
            create_child: Arc::new(Unwired),
            fetch_children: Arc::new(Unwired),
            fetch_child: Arc::new(Unwired),
            update_child: Arc::new(Unwired),
            delete_child: Arc::new(Unwired),
            add_partner: Arc::new(Unwired),
            accept_partner: Arc::new(Unwired),
            reject_partner: Arc::new(Unwired),
            resend_partner: Arc::new(Unwired),
            remove_partner: Arc::new(Unwired),
            fetch_partner_children: Arc::new(Unwired),
            fetch_partner_child: Arc::new(Unwired),
            add_recommendation: Arc::new(Unwired),
            delete_recommendation: Arc::new(Unwired),
            delete_all_recommendations: Arc::new(Unwired),
            provide_recommendation: Arc::new(Unwired),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup(mut self, uc: impl ISignupUseCase + 'static) -> Self {
        self.signup = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_verify_email(mut self, uc: impl IVerifyEmailUseCase + 'static) -> Self {
        self.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + 'static,
    ) -> Self {
        self.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_forgot_password(mut self, uc: impl IForgotPasswordUseCase + 'static) -> Self {
        self.forgot_password = Arc::new(uc);
        self
    }

    pub fn with_reset_password(mut self, uc: impl IResetPasswordUseCase + 'static) -> Self {
        self.reset_password = Arc::new(uc);
        self
    }

    pub fn with_update_password(mut self, uc: impl IUpdatePasswordUseCase + 'static) -> Self {
        self.update_password = Arc::new(uc);
        self
    }

    pub fn with_fetch_users(mut self, uc: impl IFetchUsersUseCase + 'static) -> Self {
        self.fetch_users = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl IFetchUserUseCase + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_by_username(
        mut self,
        uc: impl IFetchUserByUsernameUseCase + 'static,
    ) -> Self {
        self.fetch_user_by_username = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_set_user_active(mut self, uc: impl ISetUserActiveUseCase + 'static) -> Self {
        self.set_user_active = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_create_child(mut self, uc: impl ICreateChildUseCase + 'static) -> Self {
        self.create_child = Arc::new(uc);
        self
    }

    pub fn with_fetch_children(mut self, uc: impl IFetchChildrenUseCase + 'static) -> Self {
        self.fetch_children = Arc::new(uc);
        self
    }

    pub fn with_fetch_child(mut self, uc: impl IFetchChildUseCase + 'static) -> Self {
        self.fetch_child = Arc::new(uc);
        self
    }

    pub fn with_update_child(mut self, uc: impl IUpdateChildUseCase + 'static) -> Self {
        self.update_child = Arc::new(uc);
        self
    }

    pub fn with_delete_child(mut self, uc: impl IDeleteChildUseCase + 'static) -> Self {
        self.delete_child = Arc::new(uc);
        self
    }

    pub fn with_add_partner(mut self, uc: impl IAddPartnerUseCase + 'static) -> Self {
        self.add_partner = Arc::new(uc);
        self
    }

    pub fn with_accept_partner(mut self, uc: impl IAcceptPartnerUseCase + 'static) -> Self {
        self.accept_partner = Arc::new(uc);
        self
    }

    pub fn with_reject_partner(mut self, uc: impl IRejectPartnerUseCase + 'static) -> Self {
        self.reject_partner = Arc::new(uc);
        self
    }

    pub fn with_resend_partner(mut self, uc: impl IResendPartnerUseCase + 'static) -> Self {
        self.resend_partner = Arc::new(uc);
        self
    }

    pub fn with_remove_partner(mut self, uc: impl IRemovePartnerUseCase + 'static) -> Self {
        self.remove_partner = Arc::new(uc);
        self
    }

    pub fn with_fetch_partner_children(
        mut self,
        uc: impl IFetchPartnerChildrenUseCase + 'static,
    ) -> Self {
        self.fetch_partner_children = Arc::new(uc);
        self
    }

    pub fn with_fetch_partner_child(
        mut self,
        uc: impl IFetchPartnerChildUseCase + 'static,
    ) -> Self {
        self.fetch_partner_child = Arc::new(uc);
        self
    }

    pub fn with_add_recommendation(
        mut self,
        uc: impl IAddRecommendationUseCase + 'static,
    ) -> Self {
        self.add_recommendation = Arc::new(uc);
        self
    }

    pub fn with_delete_recommendation(
        mut self,
        uc: impl IDeleteRecommendationUseCase + 'static,
    ) -> Self {
        self.delete_recommendation = Arc::new(uc);
        self
    }

    pub fn with_delete_all_recommendations(
        mut self,
        uc: impl IDeleteAllRecommendationsUseCase + 'static,
    ) -> Self {
        self.delete_all_recommendations = Arc::new(uc);
        self
    }

    pub fn with_provide_recommendation(
        mut self,
        uc: impl IProvideRecommendationUseCase + 'static,
    ) -> Self {
        self.provide_recommendation = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_use_case: self.signup,
            login_use_case: self.login,
            verify_email_use_case: self.verify_email,
            resend_verification_use_case: self.resend_verification,
            forgot_password_use_case: self.forgot_password,
            reset_password_use_case: self.reset_password,
            update_password_use_case: self.update_password,
            fetch_users_use_case: self.fetch_users,
            fetch_user_use_case: self.fetch_user,
            fetch_user_by_username_use_case: self.fetch_user_by_username,
            update_profile_use_case: self.update_profile,
            set_user_active_use_case: self.set_user_active,
            delete_user_use_case: self.delete_user,
            create_child_use_case: self.create_child,
            fetch_children_use_case: self.fetch_children,
            fetch_child_use_case: self.fetch_child,
            update_child_use_case: self.update_child,
            delete_child_use_case: self.delete_child,
            add_partner_use_case: self.add_partner,
            accept_partner_use_case: self.accept_partner,
            reject_partner_use_case: self.reject_partner,
            resend_partner_use_case: self.resend_partner,
            remove_partner_use_case: self.remove_partner,
            fetch_partner_children_use_case: self.fetch_partner_children,
            fetch_partner_child_use_case: self.fetch_partner_child,
            add_recommendation_use_case: self.add_recommendation,
            delete_recommendation_use_case: self.delete_recommendation,
            delete_all_recommendations_use_case: self.delete_all_recommendations,
            provide_recommendation_use_case: self.provide_recommendation,
        })
    }
}
