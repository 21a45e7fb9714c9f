use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::ports::outgoing::{ChildQuery, RecommendationRepository};

#[derive(Debug, Clone)]
pub enum DeleteAllRecommendationsError {
    ChildNotFound,
    RepositoryError(String),
}

/// Empties a child's recommendation history in one shot.
#[async_trait]
pub trait IDeleteAllRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), DeleteAllRecommendationsError>;
}

pub struct DeleteAllRecommendationsUseCase<C, R>
where
    C: ChildQuery,
    R: RecommendationRepository,
{
    children: C,
    repository: R,
}

impl<C, R> DeleteAllRecommendationsUseCase<C, R>
where
    C: ChildQuery,
    R: RecommendationRepository,
{
    pub fn new(children: C, repository: R) -> Self {
        Self {
            children,
            repository,
        }
    }
}

#[async_trait]
impl<C, R> IDeleteAllRecommendationsUseCase for DeleteAllRecommendationsUseCase<C, R>
where
    C: ChildQuery + Send + Sync,
    R: RecommendationRepository + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> Result<(), DeleteAllRecommendationsError> {
        self.children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| DeleteAllRecommendationsError::RepositoryError(e.to_string()))?
            .ok_or(DeleteAllRecommendationsError::ChildNotFound)?;

        self.repository
            .remove_all(child_id)
            .await
            .map_err(|e| DeleteAllRecommendationsError::RepositoryError(e.to_string()))
    }
}
