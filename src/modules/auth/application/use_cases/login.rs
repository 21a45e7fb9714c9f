use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::hash::PasswordHashingService;
use crate::users::application::domain::entities::User;
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};
use email_address::EmailAddress;

// ========================= Login Request ==========================
/// Validated login request; deserializes straight from JSON.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        let password = password.trim().to_string();
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error ============================
#[derive(Debug, Clone)]
pub enum LoginError {
    /// Covers both unknown email and wrong password.
    InvalidCredentials,
    AccountDeactivated,
    EmailNotVerified,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

// ========================= Session ================================
/// A signed session token plus the authenticated user, shared by every
/// operation that logs the caller in.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// ========================= Use Case ===============================
#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError>;
}

pub struct LoginUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> LoginUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: PasswordHashingService,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUseCase for LoginUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError> {
        let user = self
            .query
            .find_by_email_any(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        if !user.active {
            return Err(LoginError::AccountDeactivated);
        }

        let matches = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .map_err(LoginError::PasswordVerificationFailed)?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        if !user.is_verified {
            return Err(LoginError::EmailNotVerified);
        }

        let token = self
            .token_provider
            .generate_session_token(user.id, &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        self.repository
            .set_last_login(user.id)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        Ok(Session { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::hash::PasswordHasher;
    use crate::auth::application::services::jwt::{JwtConfig, JwtService};
    use crate::tests::support::in_memory_users::{make_user, InMemoryUsers};

    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash_password(&self, password: &str) -> Result<String, String> {
            Ok(format!("hashed:{}", password))
        }

        fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    fn use_case(store: InMemoryUsers) -> LoginUseCase<InMemoryUsers, InMemoryUsers> {
        LoginUseCase::new(
            store.clone(),
            store,
            PasswordHashingService::with_hasher(Arc::new(PlainHasher)),
            Arc::new(JwtService::new(JwtConfig::new("testsecret".to_string(), 3600))),
        )
    }

    fn request() -> LoginRequest {
        LoginRequest::new("jane@example.com".to_string(), "password123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_stamps_last_login() {
        let store = InMemoryUsers::with_users(vec![make_user("Jane Doe", "jane@example.com")]);
        let use_case = use_case(store.clone());

        let session = use_case.execute(request()).await.unwrap();
        assert!(!session.token.is_empty());
        assert_eq!(session.user.email, "jane@example.com");

        let stamped = store.users.lock().unwrap()[0].user.last_login;
        assert!(stamped.is_some(), "last_login should be stamped");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let use_case = use_case(InMemoryUsers::default());

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let store = InMemoryUsers::with_users(vec![make_user("Jane Doe", "jane@example.com")]);
        let use_case = use_case(store);

        let bad = LoginRequest::new("jane@example.com".to_string(), "wrongpass".to_string())
            .unwrap();
        let result = use_case.execute(bad).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_deactivated_account() {
        let mut user = make_user("Jane Doe", "jane@example.com");
        user.active = false;
        let use_case = use_case(InMemoryUsers::with_users(vec![user]));

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::AccountDeactivated)));
    }

    #[tokio::test]
    async fn test_login_unverified_account() {
        let mut user = make_user("Jane Doe", "jane@example.com");
        user.is_verified = false;
        let use_case = use_case(InMemoryUsers::with_users(vec![user]));

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(LoginError::EmailNotVerified)));
    }
}
