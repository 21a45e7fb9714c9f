pub mod modules;
pub use modules::auth;
pub use modules::children;
pub use modules::email;
pub use modules::recommender;
pub use modules::users;

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::auth::application::use_cases::{
    forgot_password::{ForgotPasswordUseCase, IForgotPasswordUseCase},
    login::{ILoginUseCase, LoginUseCase},
    resend_verification::{IResendVerificationUseCase, ResendVerificationUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    signup::{ISignupUseCase, SignupUseCase},
    update_password::{IUpdatePasswordUseCase, UpdatePasswordUseCase},
    verify_email::{IVerifyEmailUseCase, VerifyEmailUseCase},
};
use crate::children::application::use_cases::{
    accept_partner::{AcceptPartnerUseCase, IAcceptPartnerUseCase},
    add_partner::{AddPartnerUseCase, IAddPartnerUseCase},
    add_recommendation::{AddRecommendationUseCase, IAddRecommendationUseCase},
    create_child::{CreateChildUseCase, ICreateChildUseCase},
    delete_all_recommendations::{DeleteAllRecommendationsUseCase, IDeleteAllRecommendationsUseCase},
    delete_child::{DeleteChildUseCase, IDeleteChildUseCase},
    delete_recommendation::{DeleteRecommendationUseCase, IDeleteRecommendationUseCase},
    fetch_child::{FetchChildUseCase, IFetchChildUseCase},
    fetch_children::{FetchChildrenUseCase, IFetchChildrenUseCase},
    fetch_partner_child::{FetchPartnerChildUseCase, IFetchPartnerChildUseCase},
    fetch_partner_children::{FetchPartnerChildrenUseCase, IFetchPartnerChildrenUseCase},
    reject_partner::{IRejectPartnerUseCase, RejectPartnerUseCase},
    remove_partner::{IRemovePartnerUseCase, RemovePartnerUseCase},
    resend_partner::{IResendPartnerUseCase, ResendPartnerUseCase},
    update_child::{IUpdateChildUseCase, UpdateChildUseCase},
};
use crate::recommender::application::use_cases::provide_recommendation::{
    IProvideRecommendationUseCase, ProvideRecommendationUseCase,
};
use crate::users::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_user::{FetchUserUseCase, IFetchUserUseCase},
    fetch_user_by_username::{FetchUserByUsernameUseCase, IFetchUserByUsernameUseCase},
    fetch_users::{FetchUsersUseCase, IFetchUsersUseCase},
    set_user_active::{ISetUserActiveUseCase, SetUserActiveUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub signup_use_case: Arc<dyn ISignupUseCase + Send + Sync>,
    pub login_use_case: Arc<dyn ILoginUseCase + Send + Sync>,
    pub verify_email_use_case: Arc<dyn IVerifyEmailUseCase + Send + Sync>,
    pub resend_verification_use_case: Arc<dyn IResendVerificationUseCase + Send + Sync>,
    pub forgot_password_use_case: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub update_password_use_case: Arc<dyn IUpdatePasswordUseCase + Send + Sync>,
    pub fetch_users_use_case: Arc<dyn IFetchUsersUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub fetch_user_by_username_use_case: Arc<dyn IFetchUserByUsernameUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub set_user_active_use_case: Arc<dyn ISetUserActiveUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub create_child_use_case: Arc<dyn ICreateChildUseCase + Send + Sync>,
    pub fetch_children_use_case: Arc<dyn IFetchChildrenUseCase + Send + Sync>,
    pub fetch_child_use_case: Arc<dyn IFetchChildUseCase + Send + Sync>,
    pub update_child_use_case: Arc<dyn IUpdateChildUseCase + Send + Sync>,
    pub delete_child_use_case: Arc<dyn IDeleteChildUseCase + Send + Sync>,
    pub add_partner_use_case: Arc<dyn IAddPartnerUseCase + Send + Sync>,
    pub accept_partner_use_case: Arc<dyn IAcceptPartnerUseCase + Send + Sync>,
    pub reject_partner_use_case: Arc<dyn IRejectPartnerUseCase + Send + Sync>,
    pub resend_partner_use_case: Arc<dyn IResendPartnerUseCase + Send + Sync>,
    pub remove_partner_use_case: Arc<dyn IRemovePartnerUseCase + Send + Sync>,
    pub fetch_partner_children_use_case: Arc<dyn IFetchPartnerChildrenUseCase + Send + Sync>,
    pub fetch_partner_child_use_case: Arc<dyn IFetchPartnerChildUseCase + Send + Sync>,
    pub add_recommendation_use_case: Arc<dyn IAddRecommendationUseCase + Send + Sync>,
    pub delete_recommendation_use_case: Arc<dyn IDeleteRecommendationUseCase + Send + Sync>,
    pub delete_all_recommendations_use_case:
        Arc<dyn IDeleteAllRecommendationsUseCase + Send + Sync>,
    pub provide_recommendation_use_case: Arc<dyn IProvideRecommendationUseCase + Send + Sync>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::auth::application::services::hash::PasswordHashingService;
    use crate::auth::application::services::jwt::{JwtConfig, JwtService};
    use crate::children::adapter::outgoing::{
        ChildQueryPostgres, ChildRepositoryPostgres, PartnerRequestRepositoryPostgres,
        RecommendationRepositoryPostgres,
    };
    use crate::config::AppConfig;
    use crate::email::adapter::outgoing::SmtpEmailSender;
    use crate::email::application::ports::outgoing::UserEmailNotifier;
    use crate::email::application::services::UserEmailService;
    use crate::recommender::adapter::outgoing::HttpRecommendationClient;
    use crate::users::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Configuration error");

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // SMTP: relay with credentials in production, a local catcher
    // (Mailpit, MailHog) everywhere else.
    let smtp_sender = if config.is_production() {
        SmtpEmailSender::new(
            &config.smtp.host,
            &config.smtp.username,
            &config.smtp.password,
            &config.smtp.from_email,
        )
        .expect("Failed to build SMTP transport")
    } else {
        SmtpEmailSender::new_local(&config.smtp.host, config.smtp.port, &config.smtp.from_email)
    };
    let email_service = UserEmailService::new(Arc::new(smtp_sender));
    let notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(email_service);

    let jwt_service = JwtService::new(JwtConfig::new(
        config.jwt_secret.clone(),
        config.jwt_expires_secs,
    ));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher = PasswordHashingService::bcrypt();

    // Persistence adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let child_query = ChildQueryPostgres::new(Arc::clone(&db_arc));
    let child_repo = ChildRepositoryPostgres::new(Arc::clone(&db_arc));
    let request_repo = PartnerRequestRepositoryPostgres::new(Arc::clone(&db_arc));
    let recommendation_repo = RecommendationRepositoryPostgres::new(Arc::clone(&db_arc));

    let client_url = config.app_client_url.clone();

    // Auth
    let signup_use_case = SignupUseCase::new(
        user_repo.clone(),
        password_hasher.clone(),
        Arc::clone(&notifier),
        client_url.clone(),
    );
    let login_use_case = LoginUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::clone(&token_provider),
    );
    let verify_email_use_case = VerifyEmailUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&notifier),
        Arc::clone(&token_provider),
    );
    let resend_verification_use_case = ResendVerificationUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&notifier),
        client_url.clone(),
    );
    let forgot_password_use_case = ForgotPasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&notifier),
        client_url.clone(),
    );
    let reset_password_use_case = ResetPasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::clone(&token_provider),
    );
    let update_password_use_case = UpdatePasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::clone(&token_provider),
        Arc::clone(&notifier),
    );

    // Users
    let fetch_users_use_case = FetchUsersUseCase::new(user_query.clone());
    let fetch_user_use_case = FetchUserUseCase::new(user_query.clone(), child_query.clone());
    let fetch_user_by_username_use_case = FetchUserByUsernameUseCase::new(user_query.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(user_repo.clone());
    let set_user_active_use_case =
        SetUserActiveUseCase::new(user_query.clone(), user_repo.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_query.clone(), user_repo.clone());

    // Children
    let create_child_use_case = CreateChildUseCase::new(child_repo.clone());
    let fetch_children_use_case = FetchChildrenUseCase::new(child_query.clone());
    let fetch_child_use_case = FetchChildUseCase::new(child_query.clone(), user_query.clone());
    let update_child_use_case = UpdateChildUseCase::new(child_repo.clone());
    let delete_child_use_case = DeleteChildUseCase::new(child_repo.clone());

    // Partner invitations
    let add_partner_use_case = AddPartnerUseCase::new(
        child_query.clone(),
        user_query.clone(),
        request_repo.clone(),
        notifier.clone(),
        client_url.clone(),
    );
    let accept_partner_use_case = AcceptPartnerUseCase::new(
        child_query.clone(),
        child_repo.clone(),
        request_repo.clone(),
        user_repo.clone(),
    );
    let reject_partner_use_case = RejectPartnerUseCase::new(request_repo.clone());
    let resend_partner_use_case = ResendPartnerUseCase::new(
        child_query.clone(),
        user_query.clone(),
        notifier.clone(),
        client_url.clone(),
    );
    let remove_partner_use_case = RemovePartnerUseCase::new(
        child_query.clone(),
        child_repo.clone(),
        user_repo.clone(),
    );
    let fetch_partner_children_use_case = FetchPartnerChildrenUseCase::new(child_query.clone());
    let fetch_partner_child_use_case = FetchPartnerChildUseCase::new(child_query.clone());

    // Recommendation history
    let add_recommendation_use_case =
        AddRecommendationUseCase::new(child_query.clone(), recommendation_repo.clone());
    let delete_recommendation_use_case =
        DeleteRecommendationUseCase::new(child_query.clone(), recommendation_repo.clone());
    let delete_all_recommendations_use_case =
        DeleteAllRecommendationsUseCase::new(child_query.clone(), recommendation_repo);

    // Recommender proxy
    let provide_recommendation_use_case = ProvideRecommendationUseCase::new(
        HttpRecommendationClient::new(config.recommender_url.clone()),
    );

    let state = AppState {
        signup_use_case: Arc::new(signup_use_case),
        login_use_case: Arc::new(login_use_case),
        verify_email_use_case: Arc::new(verify_email_use_case),
        resend_verification_use_case: Arc::new(resend_verification_use_case),
        forgot_password_use_case: Arc::new(forgot_password_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        update_password_use_case: Arc::new(update_password_use_case),
        fetch_users_use_case: Arc::new(fetch_users_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        fetch_user_by_username_use_case: Arc::new(fetch_user_by_username_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        set_user_active_use_case: Arc::new(set_user_active_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        create_child_use_case: Arc::new(create_child_use_case),
        fetch_children_use_case: Arc::new(fetch_children_use_case),
        fetch_child_use_case: Arc::new(fetch_child_use_case),
        update_child_use_case: Arc::new(update_child_use_case),
        delete_child_use_case: Arc::new(delete_child_use_case),
        add_partner_use_case: Arc::new(add_partner_use_case),
        accept_partner_use_case: Arc::new(accept_partner_use_case),
        reject_partner_use_case: Arc::new(reject_partner_use_case),
        resend_partner_use_case: Arc::new(resend_partner_use_case),
        remove_partner_use_case: Arc::new(remove_partner_use_case),
        fetch_partner_children_use_case: Arc::new(fetch_partner_children_use_case),
        fetch_partner_child_use_case: Arc::new(fetch_partner_child_use_case),
        add_recommendation_use_case: Arc::new(add_recommendation_use_case),
        delete_recommendation_use_case: Arc::new(delete_recommendation_use_case),
        delete_all_recommendations_use_case: Arc::new(delete_all_recommendations_use_case),
        provide_recommendation_use_case: Arc::new(provide_recommendation_use_case),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::resend_verification_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_password_handler);
    // Users
    cfg.service(crate::users::adapter::incoming::web::routes::fetch_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::fetch_user_by_username_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::deactivate_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::activate_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::delete_user_handler);
    // Children: the static partner-children path registers before the
    // /{id} routes so it is not swallowed by the parameter.
    cfg.service(crate::children::adapter::incoming::web::routes::fetch_partner_children_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::create_child_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::fetch_children_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::fetch_child_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::update_child_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::delete_child_handler);
    // Partner invitations
    cfg.service(crate::children::adapter::incoming::web::routes::add_partner_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::accept_partner_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::reject_partner_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::resend_partner_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::remove_partner_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::fetch_partner_child_handler);
    // Recommendation history
    cfg.service(crate::children::adapter::incoming::web::routes::add_recommendation_handler);
    cfg.service(crate::children::adapter::incoming::web::routes::delete_recommendation_handler);
    cfg.service(
        crate::children::adapter::incoming::web::routes::delete_all_recommendations_handler,
    );
    // Recommender proxy
    cfg.service(crate::recommender::adapter::incoming::web::routes::provide_recommendation_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
