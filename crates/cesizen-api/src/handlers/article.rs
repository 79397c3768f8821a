//! Public article handlers.

use axum::Json;
use axum::extract::{Path, State};

use cesizen_entity::article::{Article, ArticleListing};

use crate::dto::response::ArticleCollection;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /articles
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<ArticleCollection<ArticleListing>>, ApiError> {
    let articles = state.article_service.list().await?;
    Ok(Json(ArticleCollection::new(articles)))
}

/// GET /articles/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<Article>, ApiError> {
    let article = state.article_service.get(article_id).await?;
    Ok(Json(article))
}

/// GET /articles/category/{category_id}
pub async fn list_articles_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<ArticleCollection<Article>>, ApiError> {
    let articles = state.article_service.list_by_category(category_id).await?;
    Ok(Json(ArticleCollection::new(articles)))
}
