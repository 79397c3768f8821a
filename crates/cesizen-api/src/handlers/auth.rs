//! Auth handlers — login, session profile, registration.

use axum::extract::State;
use axum::{Form, Json};
use validator::Validate;

use crate::dto::request::{LoginForm, RegisterBody};
use crate::dto::response::{LoginResponse, RegisteredUser, UserProfile};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<LoginResponse>, ApiError> {
    form.validate()?;

    let outcome = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(LoginResponse::bearer(outcome.access_token)))
}

/// GET /auth/session
pub async fn session(current: CurrentUser) -> Json<UserProfile> {
    Json(UserProfile::from(current.user))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<RegisteredUser>, ApiError> {
    let user = state
        .auth_service
        .register(cesizen_service::auth::RegisterRequest {
            login: body.login,
            email: body.email,
            password: body.password,
            confirm_password: body.confirm_password,
        })
        .await?;

    Ok(Json(RegisteredUser::from(user)))
}
