use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::ports::outgoing::{ChildQuery, RecommendationRepository};

#[derive(Debug, Clone)]
pub enum DeleteRecommendationError {
    ChildNotFound,
    RecommendationNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        recommendation_id: Uuid,
    ) -> Result<(), DeleteRecommendationError>;
}

pub struct DeleteRecommendationUseCase<C, R>
where
    C: ChildQuery,
    R: RecommendationRepository,
{
    children: C,
    repository: R,
}

impl<C, R> DeleteRecommendationUseCase<C, R>
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
impl<C, R> IDeleteRecommendationUseCase for DeleteRecommendationUseCase<C, R>
where
    C: ChildQuery + Send + Sync,
    R: RecommendationRepository + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        recommendation_id: Uuid,
    ) -> Result<(), DeleteRecommendationError> {
        self.children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| DeleteRecommendationError::RepositoryError(e.to_string()))?
            .ok_or(DeleteRecommendationError::ChildNotFound)?;

        let removed = self
            .repository
            .remove(child_id, recommendation_id)
            .await
            .map_err(|e| DeleteRecommendationError::RepositoryError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(DeleteRecommendationError::RecommendationNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::application::ports::outgoing::NewRecommendation;
    use crate::tests::support::in_memory_children::{make_child, InMemoryChildren};

    async fn seed_entry(store: &InMemoryChildren, child_id: Uuid) -> Uuid {
        let entry = NewRecommendation {
            recommendation: "More outdoor play".to_string(),
            inputs: vec![1.0; 10],
            description: String::new(),
        };
        RecommendationRepository::add(store, child_id, entry)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_owner_removes_an_entry() {
        let parent_id = Uuid::new_v4();
        let child = make_child("Milo", parent_id);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let entry_id = seed_entry(&store, child_id).await;
        let use_case = DeleteRecommendationUseCase::new(store.clone(), store.clone());

        use_case.execute(parent_id, child_id, entry_id).await.unwrap();
        assert!(store.get(child_id).unwrap().recommendation_history.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_entry_is_reported() {
        let parent_id = Uuid::new_v4();
        let child = make_child("Milo", parent_id);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = DeleteRecommendationUseCase::new(store.clone(), store);

        let result = use_case.execute(parent_id, child_id, Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(DeleteRecommendationError::RecommendationNotFound)
        ));
    }
}
