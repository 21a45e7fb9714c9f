mod http_recommendation_client;

pub use http_recommendation_client::HttpRecommendationClient;
