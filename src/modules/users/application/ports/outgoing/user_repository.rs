use crate::users::application::domain::entities::{Gender, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,
    #[error("Duplicate value")]
    DuplicateValue,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Everything needed to persist a freshly signed-up account. The
/// verification token arrives pre-hashed; raw tokens never reach storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub slug: String,
    pub password_hash: String,
    pub verification_token_hash: String,
    pub verification_token_expires: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    /// Re-derived by the caller whenever `name` changes.
    pub slug: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UserRepositoryError>;

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Marks verified and clears the verification token fields; the
    /// unverified -> verified transition happens exactly once.
    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Undoes `set_reset_token` when the reset email cannot be delivered.
    async fn clear_reset_token(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// One-shot consumption: stores the new hash, stamps
    /// `password_changed_at` and clears the reset token fields.
    async fn reset_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Soft activation flag; never deletes anything.
    async fn set_active(&self, username: &str, active: bool) -> Result<User, UserRepositoryError>;

    async fn set_last_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    async fn add_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError>;

    async fn remove_partner_link(
        &self,
        user_id: Uuid,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), UserRepositoryError>;
}
