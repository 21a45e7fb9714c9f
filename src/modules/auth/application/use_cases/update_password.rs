use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::login::Session;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::hash::PasswordHashingService;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct UpdatePasswordRequest {
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePasswordRequestError {
    #[error("Current password cannot be empty")]
    EmptyCurrentPassword,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl UpdatePasswordRequest {
    pub fn new(
        current_password: String,
        new_password: String,
        confirm_password: String,
    ) -> Result<Self, UpdatePasswordRequestError> {
        if current_password.is_empty() {
            return Err(UpdatePasswordRequestError::EmptyCurrentPassword);
        }
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(UpdatePasswordRequestError::PasswordTooShort);
        }
        if new_password != confirm_password {
            return Err(UpdatePasswordRequestError::PasswordMismatch);
        }
        Ok(Self {
            current_password,
            new_password,
        })
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl<'de> Deserialize<'de> for UpdatePasswordRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct UpdatePasswordHelper {
            current_password: String,
            new_password: String,
            confirm_password: String,
        }

        let helper = UpdatePasswordHelper::deserialize(deserializer)?;
        UpdatePasswordRequest::new(
            helper.current_password,
            helper.new_password,
            helper.confirm_password,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum UpdatePasswordError {
    UserNotFound,
    WrongCurrentPassword,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdatePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdatePasswordRequest,
    ) -> Result<Session, UpdatePasswordError>;
}

pub struct UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: PasswordHashingService,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IUpdatePasswordUseCase for UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdatePasswordRequest,
    ) -> Result<Session, UpdatePasswordError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdatePasswordError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(request.current_password(), &user.password_hash)
            .map_err(UpdatePasswordError::HashingFailed)?;
        if !matches {
            return Err(UpdatePasswordError::WrongCurrentPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(request.new_password())
            .map_err(UpdatePasswordError::HashingFailed)?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| UpdatePasswordError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .email_notifier
            .send_password_changed_email(&user.email, &user.first_name())
            .await
        {
            warn!(email = %user.email, error = %e, "Password changed email could not be sent");
        }

        let token = self
            .token_provider
            .generate_session_token(user.id, &user.email)
            .map_err(|e| UpdatePasswordError::TokenGenerationFailed(e.to_string()))?;

        Ok(Session { token, user })
    }
}
