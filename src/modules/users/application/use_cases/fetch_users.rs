use async_trait::async_trait;

use crate::users::application::domain::entities::User;
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchUsersError {
    QueryError(String),
}

/// Lists active accounts; soft-deactivated users never appear here.
#[async_trait]
pub trait IFetchUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, FetchUsersError>;
}

pub struct FetchUsersUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUsersUseCase for FetchUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, FetchUsersError> {
        self.query
            .list_active()
            .await
            .map_err(|e| FetchUsersError::QueryError(e.to_string()))
    }
}
