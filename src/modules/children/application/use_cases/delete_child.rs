use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::ports::outgoing::ChildRepository;

#[derive(Debug, Clone)]
pub enum DeleteChildError {
    ChildNotFound,
    RepositoryError(String),
}

/// Hard delete; invitation and recommendation rows go with the child via
/// cascading foreign keys.
#[async_trait]
pub trait IDeleteChildUseCase: Send + Sync {
    async fn execute(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DeleteChildError>;
}

pub struct DeleteChildUseCase<R>
where
    R: ChildRepository,
{
    repository: R,
}

impl<R> DeleteChildUseCase<R>
where
    R: ChildRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteChildUseCase for DeleteChildUseCase<R>
where
    R: ChildRepository + Send + Sync,
{
    async fn execute(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DeleteChildError> {
        let deleted = self
            .repository
            .delete_child(child_id, parent_id)
            .await
            .map_err(|e| DeleteChildError::RepositoryError(e.to_string()))?;

        if deleted {
            Ok(())
        } else {
            Err(DeleteChildError::ChildNotFound)
        }
    }
}
