use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::domain::entities::{User, UserRole};
use crate::users::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum SetUserActiveError {
    NotAuthorized,
    UserNotFound,
    RepositoryError(String),
}

/// Flips the soft `active` flag on an account; admin only. Deactivation
/// hides the account from default queries, it never deletes data.
#[async_trait]
pub trait ISetUserActiveUseCase: Send + Sync {
    async fn execute(
        &self,
        acting_user_id: Uuid,
        username: &str,
        active: bool,
    ) -> Result<User, SetUserActiveError>;
}

pub struct SetUserActiveUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SetUserActiveUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ISetUserActiveUseCase for SetUserActiveUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        acting_user_id: Uuid,
        username: &str,
        active: bool,
    ) -> Result<User, SetUserActiveError> {
        let acting = self
            .query
            .find_by_id(acting_user_id)
            .await
            .map_err(|e| SetUserActiveError::RepositoryError(e.to_string()))?
            .ok_or(SetUserActiveError::NotAuthorized)?;

        if acting.role != UserRole::Admin {
            return Err(SetUserActiveError::NotAuthorized);
        }

        self.repository
            .set_active(username, active)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SetUserActiveError::UserNotFound,
                other => SetUserActiveError::RepositoryError(other.to_string()),
            })
    }
}
