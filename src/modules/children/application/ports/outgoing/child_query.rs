use crate::children::application::domain::entities::Child;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChildQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the child profile store. All loads hydrate the owned
/// partner-request and recommendation rows into the aggregate.
#[async_trait]
pub trait ChildQuery: Send + Sync {
    /// Owner-scoped lookup: `None` when the child does not exist or is not
    /// owned by `parent_id`.
    async fn find_owned(
        &self,
        child_id: Uuid,
        parent_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError>;

    /// Unscoped lookup, needed after a conditional invitation update when
    /// the acting user is not the owner.
    async fn find_by_id(&self, child_id: Uuid) -> Result<Option<Child>, ChildQueryError>;

    async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<Child>, ChildQueryError>;

    /// Children where the given user is the attached partner parent.
    async fn list_by_partner(&self, partner_id: Uuid) -> Result<Vec<Child>, ChildQueryError>;

    async fn find_as_partner(
        &self,
        child_id: Uuid,
        partner_id: Uuid,
    ) -> Result<Option<Child>, ChildQueryError>;
}
