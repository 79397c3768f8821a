//! User self-service handlers — account deletion and password reset.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::{PasswordBody, ResetPasswordBody};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// DELETE /user/delete
pub async fn self_delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(body): Json<PasswordBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    body.validate()?;

    state
        .user_service
        .self_delete(&current.user, &body.password)
        .await?;

    Ok(Json(MessageResponse::new("Account deleted successfully")))
}

/// PATCH /user/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(body): Json<ResetPasswordBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    body.validate()?;

    state
        .user_service
        .reset_password(
            &current.user,
            &body.old_password,
            &body.password,
            &body.confirm_password,
        )
        .await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}
