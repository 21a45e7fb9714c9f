pub mod user_partners;
pub mod users;
