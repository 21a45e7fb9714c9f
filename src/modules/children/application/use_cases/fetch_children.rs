use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::ChildQuery;

#[derive(Debug, Clone)]
pub enum FetchChildrenError {
    QueryError(String),
}

/// Children owned by the calling parent; partner-view children are a
/// separate lookup.
#[async_trait]
pub trait IFetchChildrenUseCase: Send + Sync {
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<Child>, FetchChildrenError>;
}

pub struct FetchChildrenUseCase<Q>
where
    Q: ChildQuery,
{
    query: Q,
}

impl<Q> FetchChildrenUseCase<Q>
where
    Q: ChildQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchChildrenUseCase for FetchChildrenUseCase<Q>
where
    Q: ChildQuery + Send + Sync,
{
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<Child>, FetchChildrenError> {
        self.query
            .list_by_parent(parent_id)
            .await
            .map_err(|e| FetchChildrenError::QueryError(e.to_string()))
    }
}
