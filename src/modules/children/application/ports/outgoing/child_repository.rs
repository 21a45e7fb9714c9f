use crate::children::application::domain::entities::Child;
use crate::users::application::domain::entities::Gender;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChildRepositoryError {
    #[error("Child not found")]
    ChildNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewChild {
    pub name: String,
    pub nickname: Option<String>,
    pub dob: NaiveDate,
    pub gender: Option<Gender>,
    pub slug: String,
    pub parent_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct ChildUpdate {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<Gender>,
    /// Re-derived by the caller whenever `name` changes.
    pub slug: Option<String>,
}

#[async_trait]
pub trait ChildRepository: Send + Sync {
    async fn create_child(&self, child: NewChild) -> Result<Child, ChildRepositoryError>;

    /// Owner-scoped update; `ChildNotFound` covers both a missing child and
    /// an ownership mismatch.
    async fn update_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
        update: ChildUpdate,
    ) -> Result<Child, ChildRepositoryError>;

    /// Owner-scoped delete; returns whether a row was removed.
    async fn delete_child(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<bool, ChildRepositoryError>;

    /// Attaches or clears the partner parent reference.
    async fn set_partner_parent(
        &self,
        child_id: Uuid,
        partner_parent_id: Option<Uuid>,
    ) -> Result<(), ChildRepositoryError>;
}
