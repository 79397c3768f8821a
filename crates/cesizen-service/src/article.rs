//! Article service.

use std::sync::Arc;

use tracing::info;

use cesizen_core::error::AppError;
use cesizen_core::result::AppResult;
use cesizen_database::repositories::article::ArticleRepository;
use cesizen_database::repositories::category::CategoryRepository;
use cesizen_entity::article::{Article, ArticleListing, NewArticle};
use cesizen_entity::user::User;

/// Data submitted when publishing an article.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateArticle {
    /// Article title.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Target category.
    pub category: i32,
}

/// Handles article publication and reading.
#[derive(Debug, Clone)]
pub struct ArticleService {
    article_repo: Arc<ArticleRepository>,
    category_repo: Arc<CategoryRepository>,
}

impl ArticleService {
    /// Creates a new article service.
    pub fn new(article_repo: Arc<ArticleRepository>, category_repo: Arc<CategoryRepository>) -> Self {
        Self {
            article_repo,
            category_repo,
        }
    }

    /// Lists all articles with category label and author login.
    pub async fn list(&self) -> AppResult<Vec<ArticleListing>> {
        self.article_repo.list_all().await
    }

    /// Gets one article by id.
    pub async fn get(&self, id: i32) -> AppResult<Article> {
        self.article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found"))
    }

    /// Lists the articles filed under one category.
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Article>> {
        self.article_repo.list_by_category(category_id).await
    }

    /// Publishes a new article authored by `author`.
    ///
    /// The target category must exist; a dangling category id is a
    /// validation failure, not a constraint violation surfaced as 500.
    pub async fn create(&self, author: &User, req: CreateArticle) -> AppResult<Article> {
        if self.category_repo.find_by_id(req.category).await?.is_none() {
            return Err(AppError::validation("Category does not exist"));
        }

        let article = self
            .article_repo
            .create(&NewArticle {
                title: req.title,
                content: req.content,
                category_id: req.category,
                user_id: author.id,
            })
            .await?;

        info!(article_id = article.id, author = %author.login, "Article created");
        Ok(article)
    }

    /// Deletes an article by id.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.article_repo.delete(id).await?;
        info!(article_id = id, "Article deleted");
        Ok(())
    }
}
