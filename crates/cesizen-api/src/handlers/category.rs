//! Public category handlers.

use axum::Json;
use axum::extract::{Path, State};

use cesizen_entity::category::Category;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.category_service.list().await?;
    Ok(Json(categories))
}

/// GET /categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Category>, ApiError> {
    let category = state.category_service.get(category_id).await?;
    Ok(Json(category))
}
