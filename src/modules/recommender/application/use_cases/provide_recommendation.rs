use async_trait::async_trait;
use serde_json::Value;

use crate::recommender::application::ports::outgoing::{
    RecommendationClient, RecommendationClientError,
};

#[derive(Debug, Clone)]
pub enum ProvideRecommendationError {
    EngineUnavailable(String),
}

/// Pass-through to the recommendation engine: no persistence, no
/// interpretation of the payload. Callers store the result through the
/// child history endpoints if they want to keep it.
#[async_trait]
pub trait IProvideRecommendationUseCase: Send + Sync {
    async fn execute(&self, input: Value) -> Result<Value, ProvideRecommendationError>;
}

pub struct ProvideRecommendationUseCase<C>
where
    C: RecommendationClient,
{
    client: C,
}

impl<C> ProvideRecommendationUseCase<C>
where
    C: RecommendationClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C> IProvideRecommendationUseCase for ProvideRecommendationUseCase<C>
where
    C: RecommendationClient + Send + Sync,
{
    async fn execute(&self, input: Value) -> Result<Value, ProvideRecommendationError> {
        self.client.recommend(input).await.map_err(|e| match e {
            RecommendationClientError::EngineUnreachable(msg)
            | RecommendationClientError::InvalidResponse(msg) => {
                ProvideRecommendationError::EngineUnavailable(msg)
            }
        })
    }
}
