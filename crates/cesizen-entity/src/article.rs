//! Article entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published wellness article.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    /// Article identifier.
    pub id: i32,
    /// Article title.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Owning category.
    pub category_id: i32,
    /// Authoring account.
    pub user_id: Uuid,
    /// When the article was published.
    pub created_at: DateTime<Utc>,
}

/// Article projection joined with its category label and author login,
/// used by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArticleListing {
    /// Article identifier.
    pub id: i32,
    /// Article title.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Category label.
    pub category: String,
    /// Author login.
    pub creator: String,
    /// When the article was published.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    /// Article title.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Owning category.
    pub category_id: i32,
    /// Authoring account.
    pub user_id: Uuid,
}
