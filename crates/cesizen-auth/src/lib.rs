//! # cesizen-auth
//!
//! Authentication and authorization building blocks for the CesiZen
//! platform.
//!
//! ## Modules
//!
//! - `jwt` — access token creation and verification
//! - `policy` — role × path-pattern × verb policy store and enforcement
//! - `password` — Argon2id password hashing and policy enforcement

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{Argon2Hasher, PasswordHasher, PasswordValidator};
pub use policy::{PolicyEnforcer, PolicyRule, PolicyStore};
