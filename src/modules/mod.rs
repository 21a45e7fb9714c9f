pub mod auth;
pub mod children;
pub mod email;
pub mod recommender;
pub mod users;
