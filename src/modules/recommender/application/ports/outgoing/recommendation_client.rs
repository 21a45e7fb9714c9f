use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendationClientError {
    #[error("Engine unreachable: {0}")]
    EngineUnreachable(String),
    #[error("Engine returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Outbound call to the recommendation engine. The input vector and the
/// engine's reply are both passed through untyped; the engine owns their
/// shape.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn recommend(&self, input: Value) -> Result<Value, RecommendationClientError>;
}
