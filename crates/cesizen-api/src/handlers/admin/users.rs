//! Admin account management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::dto::response::{AdminUserPage, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminListParams;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> Result<Json<AdminUserPage>, ApiError> {
    let page = params.page_request()?;
    let status = params.status_filter()?;

    let result = state
        .user_admin_service
        .list_users(page, status, params.role)
        .await?;

    Ok(Json(AdminUserPage::from(result)))
}

/// PATCH /admin/users/disable/{user_id}
pub async fn disable_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_admin_service.disable(user_id).await?;
    Ok(Json(MessageResponse::new(
        "Target account disabled successfully",
    )))
}

/// PATCH /admin/users/enable/{user_id}
pub async fn enable_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_admin_service.enable(user_id).await?;
    Ok(Json(MessageResponse::new(
        "Target account enabled successfully",
    )))
}

/// DELETE /admin/users/delete/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_admin_service.delete(user_id).await?;
    Ok(Json(MessageResponse::new(
        "Target account deleted successfully",
    )))
}

/// PATCH /admin/users/promote/{user_id}
pub async fn promote_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_admin_service.promote(user_id).await?;
    Ok(Json(MessageResponse::new(
        "Target account promoted successfully",
    )))
}
