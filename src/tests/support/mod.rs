pub mod app_state_builder;
pub mod in_memory_children;
pub mod in_memory_users;
pub mod recording_notifier;
