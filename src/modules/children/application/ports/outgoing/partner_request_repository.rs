use crate::children::application::domain::entities::{PartnerRequest, PartnerRequestStatus};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PartnerRequestRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PartnerRequestRepository: Send + Sync {
    /// Appends a `pending` invitation row to the child.
    async fn add_request(
        &self,
        child_id: Uuid,
        name: String,
        email: String,
    ) -> Result<PartnerRequest, PartnerRequestRepositoryError>;

    /// The accept/reject transition. Updates the row only when it is still
    /// `pending` and its stored email equals `invitee_email`, evaluated in a
    /// single conditional update. Returns `None` when nothing matched;
    /// callers surface that as an authorization failure.
    async fn resolve_request(
        &self,
        child_id: Uuid,
        request_id: Uuid,
        invitee_email: &str,
        new_status: PartnerRequestStatus,
    ) -> Result<Option<PartnerRequest>, PartnerRequestRepositoryError>;

    /// Discards every invitation row on the child; runs after an accept.
    async fn clear_requests(&self, child_id: Uuid) -> Result<(), PartnerRequestRepositoryError>;
}
