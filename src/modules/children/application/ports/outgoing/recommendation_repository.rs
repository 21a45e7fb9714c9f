use crate::children::application::domain::entities::Recommendation;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewRecommendation {
    pub recommendation: String,
    pub inputs: Vec<f64>,
    pub description: String,
}

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Appends an entry with a server-set timestamp.
    async fn add(
        &self,
        child_id: Uuid,
        entry: NewRecommendation,
    ) -> Result<Recommendation, RecommendationRepositoryError>;

    /// Removes a single entry; returns whether a row was removed.
    async fn remove(
        &self,
        child_id: Uuid,
        recommendation_id: Uuid,
    ) -> Result<bool, RecommendationRepositoryError>;

    /// Unconditionally clears the child's history.
    async fn remove_all(&self, child_id: Uuid) -> Result<(), RecommendationRepositoryError>;
}
