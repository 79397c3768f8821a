//! # cesizen-api
//!
//! HTTP API layer for CesiZen. Every inbound request passes through the
//! request gate (token verification + policy enforcement) before reaching
//! a handler; handlers translate domain results into the JSON envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
