use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::auth::application::services::hash::{token_hasher, PasswordHashingService};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::users::application::helpers::naming::{derive_username, slugify};
use crate::users::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};
use email_address::EmailAddress;
use std::sync::Arc;

/// Single-use tokens live for ten minutes.
pub const TOKEN_TTL_MINUTES: i64 = 10;

const MIN_PASSWORD_LEN: usize = 8;

// ========================= Signup Request =========================
/// Validated signup request; construction guarantees the invariants.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupRequestError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl SignupRequest {
    pub fn new(
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) -> Result<Self, SignupRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SignupRequestError::EmptyName);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(SignupRequestError::InvalidEmailFormat);
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Err(SignupRequestError::PasswordTooShort);
        }

        if password != confirm_password {
            return Err(SignupRequestError::PasswordMismatch);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for SignupRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SignupRequestHelper {
            name: String,
            email: String,
            password: String,
            confirm_password: String,
        }

        let helper = SignupRequestHelper::deserialize(deserializer)?;
        SignupRequest::new(
            helper.name,
            helper.email,
            helper.password,
            helper.confirm_password,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Signup Error ===========================
#[derive(Debug, Clone)]
pub enum SignupError {
    EmailTaken,
    HashingFailed(String),
    RepositoryError(String),
}

// ========================= Use Case ===============================
#[async_trait]
pub trait ISignupUseCase: Send + Sync {
    async fn execute(&self, request: SignupRequest) -> Result<String, SignupError>;
}

pub struct SignupUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: PasswordHashingService,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    client_url: String,
}

impl<R> SignupUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: PasswordHashingService,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
        client_url: String,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            email_notifier,
            client_url,
        }
    }
}

#[async_trait]
impl<R> ISignupUseCase for SignupUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    /// Creates the account and emails the verification link. Returns the
    /// address the link went to. A failed email send is logged but does
    /// not roll the account back; the user can ask for a resend.
    async fn execute(&self, request: SignupRequest) -> Result<String, SignupError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .map_err(SignupError::HashingFailed)?;

        let verification_token = token_hasher::generate_token();
        let new_user = NewUser {
            name: request.name().to_string(),
            username: derive_username(request.name()),
            email: request.email().to_string(),
            slug: slugify(request.name()),
            password_hash,
            verification_token_hash: token_hasher::hash_token(&verification_token),
            verification_token_expires: Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES),
        };

        let user = self.repository.create_user(new_user).await.map_err(|e| match e {
            UserRepositoryError::DuplicateValue => SignupError::EmailTaken,
            other => SignupError::RepositoryError(other.to_string()),
        })?;

        let verification_url = format!("{}/verify-email/{}", self.client_url, verification_token);
        if let Err(e) = self
            .email_notifier
            .send_verification_email(&user.email, &user.first_name(), &verification_url)
            .await
        {
            warn!(email = %user.email, error = %e, "Verification email could not be sent");
        }

        Ok(user.email)
    }
}
