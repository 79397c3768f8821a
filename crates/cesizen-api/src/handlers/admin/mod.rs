//! Admin handlers.
//!
//! Every route here is restricted to role=admin by the policy table; the
//! request gate has already enforced that before these run.

pub mod articles;
pub mod users;
