//! User domain entities.

pub mod lifecycle;
pub mod model;
pub mod role;

pub use lifecycle::LifecycleState;
pub use model::{NewUser, User};
pub use role::Role;
