//! # cesizen-core
//!
//! Core crate for the CesiZen backend. Contains configuration schemas,
//! the clock abstraction, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CesiZen crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
