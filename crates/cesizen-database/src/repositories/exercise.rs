//! Breathing exercise repository implementation.

use sqlx::PgPool;

use cesizen_core::error::{AppError, ErrorKind};
use cesizen_core::result::AppResult;
use cesizen_entity::exercise::BreathingExercise;

/// Repository for breathing exercise queries.
#[derive(Debug, Clone)]
pub struct ExerciseRepository {
    pool: PgPool,
}

impl ExerciseRepository {
    /// Create a new exercise repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an exercise by primary key.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<BreathingExercise>> {
        sqlx::query_as::<_, BreathingExercise>("SELECT * FROM breathing_exercises WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find exercise", e))
    }

    /// List all exercises.
    pub async fn list_all(&self) -> AppResult<Vec<BreathingExercise>> {
        sqlx::query_as::<_, BreathingExercise>("SELECT * FROM breathing_exercises ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list exercises", e))
    }
}
