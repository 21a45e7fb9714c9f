pub mod delete_user;
pub mod fetch_user;
pub mod fetch_user_by_username;
pub mod fetch_users;
pub mod set_user_active;
pub mod update_profile;
