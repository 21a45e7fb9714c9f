use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::children::application::domain::entities::{Recommendation, RECOMMENDATION_INPUTS};
use crate::children::application::ports::outgoing::{
    ChildQuery, NewRecommendation, RecommendationRepository,
};

/// Validated history entry: the engine's output text, the input vector it
/// was computed from and a free-form description.
#[derive(Debug, Clone)]
pub struct AddRecommendationRequest {
    recommendation: String,
    inputs: Vec<f64>,
    description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddRecommendationRequestError {
    #[error("Recommendation text cannot be empty")]
    EmptyRecommendation,
    #[error("Inputs must contain exactly 10 numbers")]
    WrongInputCount,
}

impl AddRecommendationRequest {
    pub fn new(
        recommendation: String,
        inputs: Vec<f64>,
        description: String,
    ) -> Result<Self, AddRecommendationRequestError> {
        if recommendation.trim().is_empty() {
            return Err(AddRecommendationRequestError::EmptyRecommendation);
        }
        if inputs.len() != RECOMMENDATION_INPUTS {
            return Err(AddRecommendationRequestError::WrongInputCount);
        }
        Ok(Self {
            recommendation,
            inputs,
            description,
        })
    }
}

impl<'de> Deserialize<'de> for AddRecommendationRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AddRecommendationHelper {
            recommendation: String,
            inputs: Vec<f64>,
            #[serde(default)]
            description: String,
        }

        let helper = AddRecommendationHelper::deserialize(deserializer)?;
        AddRecommendationRequest::new(helper.recommendation, helper.inputs, helper.description)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum AddRecommendationError {
    ChildNotFound,
    RepositoryError(String),
}

/// Appends to the child's recommendation history. Owner only; the partner
/// parent reads the history but never writes it.
#[async_trait]
pub trait IAddRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: AddRecommendationRequest,
    ) -> Result<Recommendation, AddRecommendationError>;
}

pub struct AddRecommendationUseCase<C, R>
where
    C: ChildQuery,
    R: RecommendationRepository,
{
    children: C,
    repository: R,
}

impl<C, R> AddRecommendationUseCase<C, R>
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
impl<C, R> IAddRecommendationUseCase for AddRecommendationUseCase<C, R>
where
    C: ChildQuery + Send + Sync,
    R: RecommendationRepository + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        child_id: Uuid,
        request: AddRecommendationRequest,
    ) -> Result<Recommendation, AddRecommendationError> {
        self.children
            .find_owned(child_id, parent_id)
            .await
            .map_err(|e| AddRecommendationError::RepositoryError(e.to_string()))?
            .ok_or(AddRecommendationError::ChildNotFound)?;

        let entry = NewRecommendation {
            recommendation: request.recommendation,
            inputs: request.inputs,
            description: request.description,
        };

        self.repository
            .add(child_id, entry)
            .await
            .map_err(|e| AddRecommendationError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_children::{make_child, InMemoryChildren};

    fn inputs() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    }

    #[tokio::test]
    async fn test_owner_appends_to_history() {
        let parent_id = Uuid::new_v4();
        let child = make_child("Milo", parent_id);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = AddRecommendationUseCase::new(store.clone(), store.clone());

        let request = AddRecommendationRequest::new(
            "More outdoor play".to_string(),
            inputs(),
            "Weekly assessment".to_string(),
        )
        .unwrap();
        let saved = use_case.execute(parent_id, child_id, request).await.unwrap();

        assert_eq!(saved.child_id, child_id);
        assert_eq!(saved.inputs.len(), RECOMMENDATION_INPUTS);
        assert_eq!(store.get(child_id).unwrap().recommendation_history.len(), 1);
    }

    #[tokio::test]
    async fn test_partner_cannot_append() {
        let partner_id = Uuid::new_v4();
        let mut child = make_child("Milo", Uuid::new_v4());
        child.partner_parent_id = Some(partner_id);
        let child_id = child.id;
        let store = InMemoryChildren::with_children(vec![child]);
        let use_case = AddRecommendationUseCase::new(store.clone(), store);

        let request = AddRecommendationRequest::new(
            "More outdoor play".to_string(),
            inputs(),
            String::new(),
        )
        .unwrap();
        let result = use_case.execute(partner_id, child_id, request).await;
        assert!(matches!(result, Err(AddRecommendationError::ChildNotFound)));
    }

    #[test]
    fn test_input_vector_must_hold_exactly_ten_numbers() {
        let short = AddRecommendationRequest::new("Text".to_string(), vec![1.0; 9], String::new());
        assert!(matches!(
            short,
            Err(AddRecommendationRequestError::WrongInputCount)
        ));

        let long = AddRecommendationRequest::new("Text".to_string(), vec![1.0; 11], String::new());
        assert!(matches!(
            long,
            Err(AddRecommendationRequestError::WrongInputCount)
        ));
    }
}
