use async_trait::async_trait;
use serde_json::{json, Value};

use crate::recommender::application::ports::outgoing::{
    RecommendationClient, RecommendationClientError,
};

/// `reqwest`-backed client for the recommendation engine. Posts
/// `{"input": ...}` to the configured endpoint and hands back the raw
/// JSON body.
pub struct HttpRecommendationClient {
    client: reqwest::Client,
    engine_url: String,
}

impl HttpRecommendationClient {
    pub fn new(engine_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            engine_url,
        }
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(&self, input: Value) -> Result<Value, RecommendationClientError> {
        let response = self
            .client
            .post(&self.engine_url)
            .json(&json!({ "input": input }))
            .send()
            .await
            .map_err(|e| RecommendationClientError::EngineUnreachable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| RecommendationClientError::EngineUnreachable(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| RecommendationClientError::InvalidResponse(e.to_string()))
    }
}
