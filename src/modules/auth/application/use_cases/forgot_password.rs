use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::warn;

use super::signup::TOKEN_TTL_MINUTES;
use crate::auth::application::services::hash::token_hasher;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::users::application::ports::outgoing::{UserQuery, UserRepository};

#[derive(Debug, Clone)]
pub enum ForgotPasswordError {
    UnknownEmail,
    EmailDeliveryFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<String, ForgotPasswordError>;
}

pub struct ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    client_url: String,
}

impl<Q, R> ForgotPasswordUseCase<Q, R>
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
impl<Q, R> IForgotPasswordUseCase for ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    /// Stores a hashed reset token and mails the raw one. If the mail
    /// cannot be delivered the token is cleared again so no orphaned
    /// reset window stays open.
    async fn execute(&self, email: &str) -> Result<String, ForgotPasswordError> {
        let email = email.trim().to_lowercase();
        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ForgotPasswordError::UnknownEmail)?;

        let raw_token = token_hasher::generate_token();
        self.repository
            .set_reset_token(
                user.id,
                token_hasher::hash_token(&raw_token),
                Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES),
            )
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?;

        let reset_url = format!("{}/reset-password/{}", self.client_url, raw_token);
        if let Err(e) = self
            .email_notifier
            .send_password_reset_email(&user.email, &user.first_name(), &reset_url)
            .await
        {
            if let Err(clear_err) = self.repository.clear_reset_token(user.id).await {
                warn!(user_id = %user.id, error = %clear_err, "Failed to clear reset token");
            }
            return Err(ForgotPasswordError::EmailDeliveryFailed(e.to_string()));
        }

        Ok(user.email)
    }
}
