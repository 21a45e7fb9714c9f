use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::ports::outgoing::{ChildQuery, ChildRepository};
use crate::users::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone)]
pub enum RemovePartnerError {
    ChildNotFound,
    NoPartnerAttached,
    RepositoryError(String),
}

/// Detaches the partner parent from a child and drops both partner links.
/// Only the owning parent may do this; afterwards the child accepts new
/// invitations again.
#[async_trait]
pub trait IRemovePartnerUseCase: Send + Sync {
    async fn execute(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), RemovePartnerError>;
}

pub struct RemovePartnerUseCase<C, R, U>
where
    C: ChildQuery,
    R: ChildRepository,
    U: UserRepository,
{
    children: C,
    child_repository: R,
    users: U,
}

impl<C, R, U> RemovePartnerUseCase<C, R, U>
where
    C: ChildQuery,
    R: ChildRepository,
    U: UserRepository,
{
    pub fn new(children: C, child_repository: R, users: U) -> Self {
        Self {
            children,
            child_repository,
            users,
        }
    }
}

#[async_trait]
impl<C, R, U> IRemovePartnerUseCase for RemovePartnerUseCase<C, R, U>
where
    C: ChildQuery + Send + Sync,
    R: ChildRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), RemovePartnerError> {
        let child = self
            .children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| RemovePartnerError::RepositoryError(e.to_string()))?
            .ok_or(RemovePartnerError::ChildNotFound)?;

        let partner_id = child
            .partner_parent_id
            .ok_or(RemovePartnerError::NoPartnerAttached)?;

        self.child_repository
            .set_partner_parent(child_id, None)
            .await
            .map_err(|e| RemovePartnerError::RepositoryError(e.to_string()))?;

        self.users
            .remove_partner_link(parent_id, partner_id, child_id)
            .await
            .map_err(|e| RemovePartnerError::RepositoryError(e.to_string()))?;
        self.users
            .remove_partner_link(partner_id, parent_id, child_id)
            .await
            .map_err(|e| RemovePartnerError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
