//! Authentication flow — login, registration, current-account resolution.

pub mod service;

pub use service::{AuthService, LoginOutcome, RegisterRequest};
