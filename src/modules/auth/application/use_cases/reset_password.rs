use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use super::login::Session;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::hash::{token_hasher, PasswordHashingService};
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct ResetPasswordRequest {
    token: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordRequestError {
    #[error("Token cannot be empty")]
    EmptyToken,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ResetPasswordRequest {
    pub fn new(
        token: String,
        password: String,
        confirm_password: String,
    ) -> Result<Self, ResetPasswordRequestError> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ResetPasswordRequestError::EmptyToken);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ResetPasswordRequestError::PasswordTooShort);
        }
        if password != confirm_password {
            return Err(ResetPasswordRequestError::PasswordMismatch);
        }
        Ok(Self { token, password })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for ResetPasswordRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ResetPasswordHelper {
            token: String,
            password: String,
            confirm_password: String,
        }

        let helper = ResetPasswordHelper::deserialize(deserializer)?;
        ResetPasswordRequest::new(helper.token, helper.password, helper.confirm_password)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum ResetPasswordError {
    InvalidOrExpiredToken,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, request: ResetPasswordRequest) -> Result<Session, ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
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
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    /// Consumes the reset token, stores the new hash and logs the user
    /// in. `reset_password` clears the token fields, so a second attempt
    /// with the same token fails the lookup.
    async fn execute(&self, request: ResetPasswordRequest) -> Result<Session, ResetPasswordError> {
        let token_hash = token_hasher::hash_token(request.token());
        let user = self
            .query
            .find_by_reset_token(&token_hash, Utc::now())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        let new_hash = self
            .password_hasher
            .hash_password(request.password())
            .map_err(ResetPasswordError::HashingFailed)?;

        self.repository
            .reset_password(user.id, new_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        let token = self
            .token_provider
            .generate_session_token(user.id, &user.email)
            .map_err(|e| ResetPasswordError::TokenGenerationFailed(e.to_string()))?;

        Ok(Session { token, user })
    }
}
