use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::{Child, PartnerRequestStatus};
use crate::children::application::ports::outgoing::{
    ChildQuery, ChildRepository, PartnerRequestRepository,
};
use crate::users::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone)]
pub enum AcceptPartnerError {
    /// No pending invitation with this id is addressed to the caller.
    NotAuthorized,
    ChildNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IAcceptPartnerUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_email: &str,
        child_id: Uuid,
        request_id: Uuid,
    ) -> Result<Child, AcceptPartnerError>;
}

pub struct AcceptPartnerUseCase<C, R, P, U>
where
    C: ChildQuery,
    R: ChildRepository,
    P: PartnerRequestRepository,
    U: UserRepository,
{
    children: C,
    child_repository: R,
    requests: P,
    users: U,
}

impl<C, R, P, U> AcceptPartnerUseCase<C, R, P, U>
where
    C: ChildQuery,
    R: ChildRepository,
    P: PartnerRequestRepository,
    U: UserRepository,
{
    pub fn new(children: C, child_repository: R, requests: P, users: U) -> Self {
        Self {
            children,
            child_repository,
            requests,
            users,
        }
    }
}

#[async_trait]
impl<C, R, P, U> IAcceptPartnerUseCase for AcceptPartnerUseCase<C, R, P, U>
where
    C: ChildQuery + Send + Sync,
    R: ChildRepository + Send + Sync,
    P: PartnerRequestRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    /// The caller proves entitlement by matching the invitation's invitee
    /// email. The conditional update in `resolve_request` is the gate: it
    /// only fires on a pending row addressed to the caller, so a second
    /// accept of the same invitation falls through to `NotAuthorized`.
    ///
    /// On success every other invitation on the child is discarded, the
    /// caller becomes the partner parent and both accounts get a partner
    /// link for this child.
    async fn execute(
        &self,
        acting_user_id: Uuid,
        acting_email: &str,
        child_id: Uuid,
        request_id: Uuid,
    ) -> Result<Child, AcceptPartnerError> {
        self.requests
            .resolve_request(
                child_id,
                request_id,
                acting_email,
                PartnerRequestStatus::Accepted,
            )
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?
            .ok_or(AcceptPartnerError::NotAuthorized)?;

        let child = self
            .children
            .find_by_id(child_id)
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?
            .ok_or(AcceptPartnerError::ChildNotFound)?;

        self.requests
            .clear_requests(child_id)
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?;

        self.child_repository
            .set_partner_parent(child_id, Some(acting_user_id))
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?;

        self.users
            .add_partner_link(child.parent_id, acting_user_id, child_id)
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?;
        self.users
            .add_partner_link(acting_user_id, child.parent_id, child_id)
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?;

        self.children
            .find_by_id(child_id)
            .await
            .map_err(|e| AcceptPartnerError::RepositoryError(e.to_string()))?
            .ok_or(AcceptPartnerError::ChildNotFound)
    }
}
