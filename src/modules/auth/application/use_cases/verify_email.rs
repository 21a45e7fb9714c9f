use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use super::login::Session;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::hash::token_hasher;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};

#[derive(Debug, Clone)]
pub enum VerifyEmailError {
    /// Unknown token, expired token, or a token already consumed.
    InvalidOrExpiredToken,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyEmailUseCase: Send + Sync {
    async fn execute(&self, raw_token: &str) -> Result<Session, VerifyEmailError>;
}

pub struct VerifyEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> VerifyEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            email_notifier,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyEmailUseCase for VerifyEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    /// Consumes the verification token and logs the user in. Clearing the
    /// token fields makes the token single-use.
    async fn execute(&self, raw_token: &str) -> Result<Session, VerifyEmailError> {
        let token_hash = token_hasher::hash_token(raw_token);
        let user = self
            .query
            .find_by_verification_token(&token_hash, Utc::now())
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyEmailError::InvalidOrExpiredToken)?;

        let user = self
            .repository
            .mark_verified(user.id)
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .email_notifier
            .send_welcome_email(&user.email, &user.first_name())
            .await
        {
            warn!(email = %user.email, error = %e, "Welcome email could not be sent");
        }

        let token = self
            .token_provider
            .generate_session_token(user.id, &user.email)
            .map_err(|e| VerifyEmailError::TokenGenerationFailed(e.to_string()))?;

        Ok(Session { token, user })
    }
}
