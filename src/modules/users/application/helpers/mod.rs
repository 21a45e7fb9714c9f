pub mod naming;

pub use naming::{derive_username, slugify};
