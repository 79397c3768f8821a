//! Admin article management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use cesizen_service::article::CreateArticle;

use crate::dto::request::CreateArticleBody;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /admin/article
pub async fn create_article(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(body): Json<CreateArticleBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    body.validate()?;

    state
        .article_service
        .create(
            &current.user,
            CreateArticle {
                title: body.title,
                content: body.content,
                category: body.category,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Article created successfully")),
    ))
}

/// DELETE /admin/article/{article_id}
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.article_service.delete(article_id).await?;
    Ok(Json(MessageResponse::new("Article deleted successfully")))
}
