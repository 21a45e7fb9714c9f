use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::ChildQuery;
use crate::users::application::domain::entities::User;
use crate::users::application::ports::outgoing::UserQuery;

/// A single child profile together with the accounts attached to it.
#[derive(Debug, Clone)]
pub struct ChildDetails {
    pub child: Child,
    pub parent: Option<User>,
    pub partner_parent: Option<User>,
}

#[derive(Debug, Clone)]
pub enum FetchChildError {
    ChildNotFound,
    QueryError(String),
}

#[async_trait]
pub trait IFetchChildUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<ChildDetails, FetchChildError>;
}

pub struct FetchChildUseCase<C, U>
where
    C: ChildQuery,
    U: UserQuery,
{
    children: C,
    users: U,
}

impl<C, U> FetchChildUseCase<C, U>
where
    C: ChildQuery,
    U: UserQuery,
{
    pub fn new(children: C, users: U) -> Self {
        Self { children, users }
    }
}

#[async_trait]
impl<C, U> IFetchChildUseCase for FetchChildUseCase<C, U>
where
    C: ChildQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    /// Owner-scoped: a child belonging to someone else reads as not found.
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<ChildDetails, FetchChildError> {
        let child = self
            .children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| FetchChildError::QueryError(e.to_string()))?
            .ok_or(FetchChildError::ChildNotFound)?;

        let parent = self
            .users
            .find_by_id(child.parent_id)
            .await
            .map_err(|e| FetchChildError::QueryError(e.to_string()))?;

        let partner_parent = match child.partner_parent_id {
            Some(partner_id) => self
                .users
                .find_by_id(partner_id)
                .await
                .map_err(|e| FetchChildError::QueryError(e.to_string()))?,
            None => None,
        };

        Ok(ChildDetails {
            child,
            parent,
            partner_parent,
        })
    }
}
