//! Breathing exercise service.

use std::sync::Arc;

use cesizen_core::error::AppError;
use cesizen_core::result::AppResult;
use cesizen_database::repositories::exercise::ExerciseRepository;
use cesizen_entity::exercise::BreathingExercise;

/// Handles breathing exercise reading.
#[derive(Debug, Clone)]
pub struct ExerciseService {
    exercise_repo: Arc<ExerciseRepository>,
}

impl ExerciseService {
    /// Creates a new exercise service.
    pub fn new(exercise_repo: Arc<ExerciseRepository>) -> Self {
        Self { exercise_repo }
    }

    /// Lists all exercises.
    pub async fn list(&self) -> AppResult<Vec<BreathingExercise>> {
        self.exercise_repo.list_all().await
    }

    /// Gets one exercise by id.
    pub async fn get(&self, id: i32) -> AppResult<BreathingExercise> {
        self.exercise_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise not found"))
    }
}
