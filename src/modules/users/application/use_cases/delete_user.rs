use async_trait::async_trait;
use uuid::Uuid;

use crate::users::application::domain::entities::UserRole;
use crate::users::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    NotAuthorized,
    UserNotFound,
    RepositoryError(String),
}

/// Hard delete, admin only. Owned children and their rows go with the
/// account via cascading foreign keys.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, acting_user_id: Uuid, user_id: Uuid) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeleteUserUseCase for DeleteUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, acting_user_id: Uuid, user_id: Uuid) -> Result<(), DeleteUserError> {
        let acting = self
            .query
            .find_by_id(acting_user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::NotAuthorized)?;

        if acting.role != UserRole::Admin {
            return Err(DeleteUserError::NotAuthorized);
        }

        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_users::{make_user, InMemoryUsers};

    #[tokio::test]
    async fn test_admin_deletes_account() {
        let mut admin = make_user("Root Admin", "admin@pathnest.io");
        admin.role = UserRole::Admin;
        let admin_id = admin.id;
        let target = make_user("Jane Doe", "jane@example.com");
        let target_id = target.id;
        let store = InMemoryUsers::with_users(vec![admin, target]);
        let use_case = DeleteUserUseCase::new(store.clone(), store.clone());

        use_case.execute(admin_id, target_id).await.unwrap();
        assert!(store.get(target_id).is_none());
    }

    #[tokio::test]
    async fn test_non_admin_cannot_delete() {
        let caller = make_user("Plain User", "plain@example.com");
        let caller_id = caller.id;
        let target = make_user("Jane Doe", "jane@example.com");
        let target_id = target.id;
        let store = InMemoryUsers::with_users(vec![caller, target]);
        let use_case = DeleteUserUseCase::new(store.clone(), store.clone());

        let result = use_case.execute(caller_id, target_id).await;
        assert!(matches!(result, Err(DeleteUserError::NotAuthorized)));
        assert!(store.get(target_id).is_some());
    }
}
