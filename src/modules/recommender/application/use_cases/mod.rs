pub mod provide_recommendation;
