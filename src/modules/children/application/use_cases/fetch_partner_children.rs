use async_trait::async_trait;
use uuid::Uuid;

use crate::children::application::domain::entities::Child;
use crate::children::application::ports::outgoing::ChildQuery;

#[derive(Debug, Clone)]
pub enum FetchPartnerChildrenError {
    QueryError(String),
}

/// Children the caller is attached to as partner parent, read-only.
#[async_trait]
pub trait IFetchPartnerChildrenUseCase: Send + Sync {
    async fn execute(&self, partner_id: Uuid) -> Result<Vec<Child>, FetchPartnerChildrenError>;
}

pub struct FetchPartnerChildrenUseCase<Q>
where
    Q: ChildQuery,
{
    query: Q,
}

impl<Q> FetchPartnerChildrenUseCase<Q>
where
    Q: ChildQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchPartnerChildrenUseCase for FetchPartnerChildrenUseCase<Q>
where
    Q: ChildQuery + Send + Sync,
{
    async fn execute(&self, partner_id: Uuid) -> Result<Vec<Child>, FetchPartnerChildrenError> {
        self.query
            .list_by_partner(partner_id)
            .await
            .map_err(|e| FetchPartnerChildrenError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_children::{make_child, InMemoryChildren};

    #[tokio::test]
    async fn test_lists_children_attached_as_partner() {
        let partner_id = Uuid::new_v4();
        let mut attached = make_child("Milo", Uuid::new_v4());
        attached.partner_parent_id = Some(partner_id);
        let owned = make_child("Luna", partner_id);
        let store = InMemoryChildren::with_children(vec![attached, owned]);
        let use_case = FetchPartnerChildrenUseCase::new(store);

        let children = use_case.execute(partner_id).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "Milo");
    }
}
