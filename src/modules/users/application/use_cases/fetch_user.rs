use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::ChildQuery;
use crate::users::application::domain::entities::User;
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchUserError {
    UserNotFound,
    QueryError(String),
}

/// A user profile together with the children they own.
#[derive(Debug, Clone)]
pub struct UserWithChildren {
    pub user: User,
    pub children: Vec<Child>,
}

#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserWithChildren, FetchUserError>;
}

pub struct FetchUserUseCase<Q, C>
where
    Q: UserQuery,
    C: ChildQuery,
{
    user_query: Q,
    child_query: C,
}

impl<Q, C> FetchUserUseCase<Q, C>
where
    Q: UserQuery,
    C: ChildQuery,
{
    pub fn new(user_query: Q, child_query: C) -> Self {
        Self {
            user_query,
            child_query,
        }
    }
}

#[async_trait]
impl<Q, C> IFetchUserUseCase for FetchUserUseCase<Q, C>
where
    Q: UserQuery + Send + Sync,
    C: ChildQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserWithChildren, FetchUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::UserNotFound)?;

        let children = self
            .child_query
            .list_by_parent(user.id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?;

        Ok(UserWithChildren { user, children })
    }
}
