use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use super::signup::TOKEN_TTL_MINUTES;
use crate::auth::application::services::hash::token_hasher;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};

#[derive(Debug, Clone)]
pub enum ResendVerificationError {
    UnknownEmail,
    AlreadyVerified,
    EmailDeliveryFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<String, ResendVerificationError>;
}

pub struct ResendVerificationUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    client_url: String,
}

impl<Q, R> ResendVerificationUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
        client_url: String,
    ) -> Self {
        Self {
            query,
            repository,
            email_notifier,
            client_url,
        }
    }
}

#[async_trait]
impl<Q, R> IResendVerificationUseCase for ResendVerificationUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    /// Issues a fresh verification token, invalidating any earlier one,
    /// and mails it. Returns the address the link went to.
    async fn execute(&self, email: &str) -> Result<String, ResendVerificationError> {
        let email = email.trim().to_lowercase();
        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?
            .ok_or(ResendVerificationError::UnknownEmail)?;

        if user.is_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let raw_token = token_hasher::generate_token();
        self.repository
            .set_verification_token(
                user.id,
                token_hasher::hash_token(&raw_token),
                Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES),
            )
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?;

        let verification_url = format!("{}/verify-email/{}", self.client_url, raw_token);
        self.email_notifier
            .send_verification_email(&user.email, &user.first_name(), &verification_url)
            .await
            .map_err(|e| ResendVerificationError::EmailDeliveryFailed(e.to_string()))?;

        Ok(user.email)
    }
}
