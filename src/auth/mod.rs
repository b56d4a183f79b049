pub mod permissions;

pub use permissions::{CurrentUser, Permission, Role, Viewer};
