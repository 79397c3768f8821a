//! Article repository implementation.

use sqlx::PgPool;

use cesizen_core::error::{AppError, ErrorKind};
use cesizen_core::result::AppResult;
use cesizen_entity::article::{Article, ArticleListing, NewArticle};

/// Repository for article CRUD and listing queries.
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    pool: PgPool,
}

impl ArticleRepository {
    /// Create a new article repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an article by primary key.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Article>> {
        sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find article", e))
    }

    /// List all articles joined with their category label and author login.
    pub async fn list_all(&self) -> AppResult<Vec<ArticleListing>> {
        sqlx::query_as::<_, ArticleListing>(
            "SELECT a.id, a.title, a.content, c.label AS category, u.login AS creator, a.created_at \
             FROM articles a \
             JOIN categories c ON c.id = a.category_id \
             JOIN users u ON u.id = a.user_id \
             ORDER BY a.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list articles", e))
    }

    /// List all articles in one category.
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(
            "SELECT * FROM articles WHERE category_id = $1 ORDER BY created_at DESC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list articles by category", e)
        })
    }

    /// Insert a new article.
    pub async fn create(&self, data: &NewArticle) -> AppResult<Article> {
        sqlx::query_as::<_, Article>(
            "INSERT INTO articles (title, content, category_id, user_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.category_id)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create article", e))
    }

    /// Delete an article by id.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete article", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Article not found"));
        }
        Ok(())
    }
}
