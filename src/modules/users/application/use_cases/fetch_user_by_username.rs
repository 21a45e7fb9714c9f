use async_trait::async_trait;

use crate::users::application::domain::entities::User;
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchUserByUsernameError {
    UserNotFound,
    QueryError(String),
}

#[async_trait]
pub trait IFetchUserByUsernameUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<User, FetchUserByUsernameError>;
}

pub struct FetchUserByUsernameUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserByUsernameUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUserByUsernameUseCase for FetchUserByUsernameUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<User, FetchUserByUsernameError> {
        self.query
            .find_by_username(username)
            .await
            .map_err(|e| FetchUserByUsernameError::QueryError(e.to_string()))?
            .ok_or(FetchUserByUsernameError::UserNotFound)
    }
}
