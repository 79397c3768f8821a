//! # cesizen-service
//!
//! Business logic services for CesiZen. Services are plain structs over
//! injected `Arc` dependencies (repositories, hasher, token codec, clock)
//! so that every collaborator can be swapped in tests.

pub mod article;
pub mod auth;
pub mod category;
pub mod context;
pub mod exercise;
pub mod user;

pub use context::RequestContext;
