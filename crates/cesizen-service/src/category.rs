//! Category service.

use std::sync::Arc;

use cesizen_core::error::AppError;
use cesizen_core::result::AppResult;
use cesizen_database::repositories::category::CategoryRepository;
use cesizen_entity::category::Category;

/// Handles category reading.
#[derive(Debug, Clone)]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Lists all categories ordered by label.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.category_repo.list_all().await
    }

    /// Gets one category by id.
    pub async fn get(&self, id: i32) -> AppResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category with id {id} not found")))
    }
}
