mod delete_user;
mod fetch_user;
mod fetch_user_by_username;
mod fetch_users;
mod set_user_active;
mod update_profile;

pub use delete_user::delete_user_handler;
pub use fetch_user::fetch_user_handler;
pub use fetch_user_by_username::fetch_user_by_username_handler;
pub use fetch_users::fetch_users_handler;
pub use set_user_active::{activate_user_handler, deactivate_user_handler};
pub use update_profile::{update_profile_handler, UpdateProfileBody};

pub use delete_user::{__path_delete_user_handler};
pub use fetch_user::{__path_fetch_user_handler};
pub use fetch_user_by_username::{__path_fetch_user_by_username_handler};
pub use fetch_users::{__path_fetch_users_handler};
pub use set_user_active::{__path_activate_user_handler, __path_deactivate_user_handler};
pub use update_profile::{__path_update_profile_handler};
