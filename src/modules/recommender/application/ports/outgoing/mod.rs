mod recommendation_client;

pub use recommendation_client::{RecommendationClient, RecommendationClientError};
