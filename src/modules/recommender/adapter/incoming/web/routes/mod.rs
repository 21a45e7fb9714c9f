mod provide_recommendation;

pub use provide_recommendation::{provide_recommendation_handler, ProvideRecommendationBody};

pub use provide_recommendation::{__path_provide_recommendation_handler};
