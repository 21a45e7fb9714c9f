use crate::users::application::domain::entities::{PartnerLink, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user directory. Lookups exclude deactivated accounts
/// unless stated otherwise, mirroring the directory's default visibility
/// rule for soft-deactivated users.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Includes deactivated accounts; login needs it to distinguish a
    /// deactivated account from a wrong credential.
    async fn find_by_email_any(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Matches the hashed verification token with an unexpired window.
    async fn find_by_verification_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError>;

    /// Matches the hashed password-reset token with an unexpired window.
    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, UserQueryError>;

    async fn list_active(&self) -> Result<Vec<User>, UserQueryError>;

    async fn partners_of(&self, user_id: Uuid) -> Result<Vec<PartnerLink>, UserQueryError>;
}
