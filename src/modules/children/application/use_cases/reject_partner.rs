use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::{PartnerRequest, PartnerRequestStatus};
use crate::children::application::ports::outgoing::PartnerRequestRepository;

#[derive(Debug, Clone)]
pub enum RejectPartnerError {
    /// No pending invitation with this id is addressed to the caller.
    NotAuthorized,
    RepositoryError(String),
}

/// Marks an invitation rejected. The row is kept for the audit trail and
/// does not block the owner from inviting the same address again.
#[async_trait]
pub trait IRejectPartnerUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_email: &str,
        child_id: Uuid,
        request_id: Uuid,
    ) -> Result<PartnerRequest, RejectPartnerError>;
}

pub struct RejectPartnerUseCase<P>
where
    P: PartnerRequestRepository,
{
    requests: P,
}

impl<P> RejectPartnerUseCase<P>
where
    P: PartnerRequestRepository,
{
    pub fn new(requests: P) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl<P> IRejectPartnerUseCase for RejectPartnerUseCase<P>
where
    P: PartnerRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_email: &str,
        child_id: Uuid,
        request_id: Uuid,
    ) -> Result<PartnerRequest, RejectPartnerError> {
        self.requests
            .resolve_request(
                child_id,
                request_id,
                acting_email,
                PartnerRequestStatus::Rejected,
            )
            .await
            .map_err(|e| RejectPartnerError::RepositoryError(e.to_string()))?
            .ok_or(RejectPartnerError::NotAuthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_children::{
        make_child, make_pending_request, InMemoryChildren,
    };

    #[tokio::test]
    async fn test_invitee_rejects_invitation() {
        let mut child = make_child("Milo", Uuid::new_v4());
        let request = make_pending_request(child.id, "Bo", "bo@example.com");
        let request_id = request.id;
        child.partner_requests.push(request);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = RejectPartnerUseCase::new(store.clone());

        let rejected = use_case
            .execute("bo@example.com", child_id, request_id)
            .await
            .unwrap();
        assert_eq!(rejected.status, PartnerRequestStatus::Rejected);

        // The row is kept; only the status flips.
        let stored = store.get(child_id).unwrap();
        assert_eq!(stored.partner_requests.len(), 1);
        assert!(stored.partner_parent_id.is_none());
    }

    #[tokio::test]
    async fn test_rejection_is_single_use() {
        let mut child = make_child("Milo", Uuid::new_v4());
        let request = make_pending_request(child.id, "Bo", "bo@example.com");
        let request_id = request.id;
        child.partner_requests.push(request);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = RejectPartnerUseCase::new(store);

        use_case
            .execute("bo@example.com", child_id, request_id)
            .await
            .unwrap();
        let again = use_case.execute("bo@example.com", child_id, request_id).await;
        assert!(matches!(again, Err(RejectPartnerError::NotAuthorized)));
    }

    #[tokio::test]
    async fn test_wrong_invitee_cannot_reject() {
        let mut child = make_child("Milo", Uuid::new_v4());
        let request = make_pending_request(child.id, "Bo", "bo@example.com");
        let request_id = request.id;
        child.partner_requests.push(request);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = RejectPartnerUseCase::new(store.clone());

        let result = use_case
            .execute("mallory@example.com", child_id, request_id)
            .await;
        assert!(matches!(result, Err(RejectPartnerError::NotAuthorized)));
        assert_eq!(
            store.get(child_id).unwrap().partner_requests[0].status,
            PartnerRequestStatus::Pending
        );
    }
}
