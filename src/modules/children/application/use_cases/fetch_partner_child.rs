use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::ChildQuery;

#[derive(Debug, Clone)]
pub enum FetchPartnerChildError {
    ChildNotFound,
    QueryError(String),
}

#[async_trait]
pub trait IFetchPartnerChildUseCase: Send + Sync {
    async fn execute(
        &self,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<Child, FetchPartnerChildError>;
}

pub struct FetchPartnerChildUseCase<Q>
where
    Q: ChildQuery,
{
    query: Q,
}

impl<Q> FetchPartnerChildUseCase<Q>
where
    Q: ChildQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchPartnerChildUseCase for FetchPartnerChildUseCase<Q>
where
    Q: ChildQuery + Send + Sync,
{
    /// Scoped to the partner attachment: a child the caller merely owns, or
    /// is a stranger to, reads as not found.
    async fn execute(
        &self,
        partner_id: Uuid,
        child_id: Uuid,
    ) -> Result<Child, FetchPartnerChildError> {
        self.query
            .find_as_partner(child_id, partner_id)
            .await
            .map_err(|e| FetchPartnerChildError::QueryError(e.to_string()))?
            .ok_or(FetchPartnerChildError::ChildNotFound)
    }
}
