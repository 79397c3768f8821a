//! Route definitions for the CesiZen HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. The request gate wraps every route, so even routes
//! open to anonymous callers need a matching policy rule.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(article_routes())
        .merge(category_routes())
        .merge(exercise_routes())
        .merge(admin_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::authorize,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, register, session.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/session", get(handlers::auth::session))
}

/// User self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/delete", delete(handlers::user::self_delete))
        .route("/user/reset-password", patch(handlers::user::reset_password))
}

/// Public article reading.
fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(handlers::article::list_articles))
        .route("/articles/{article_id}", get(handlers::article::get_article))
        .route(
            "/articles/category/{category_id}",
            get(handlers::article::list_articles_by_category),
        )
}

/// Public category reading.
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route(
            "/categories/{category_id}",
            get(handlers::category::get_category),
        )
}

/// Public breathing exercise reading.
fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(handlers::exercise::list_exercises))
        .route(
            "/exercises/{exercise_id}",
            get(handlers::exercise::get_exercise),
        )
}

/// Admin endpoints, all policy-gated to role=admin.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/users/disable/{user_id}",
            patch(handlers::admin::users::disable_user),
        )
        .route(
            "/admin/users/enable/{user_id}",
            patch(handlers::admin::users::enable_user),
        )
        .route(
            "/admin/users/delete/{user_id}",
            delete(handlers::admin::users::delete_user),
        )
        .route(
            "/admin/users/promote/{user_id}",
            patch(handlers::admin::users::promote_user),
        )
        .route(
            "/admin/article",
            post(handlers::admin::articles::create_article),
        )
        .route(
            "/admin/article/{article_id}",
            delete(handlers::admin::articles::delete_article),
        )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
