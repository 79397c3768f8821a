//! Public breathing exercise handlers.

use axum::Json;
use axum::extract::{Path, State};

use cesizen_entity::exercise::BreathingExercise;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
) -> Result<Json<Vec<BreathingExercise>>, ApiError> {
    let exercises = state.exercise_service.list().await?;
    Ok(Json(exercises))
}

/// GET /exercises/{exercise_id}
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(exercise_id): Path<i32>,
) -> Result<Json<BreathingExercise>, ApiError> {
    let exercise = state.exercise_service.get(exercise_id).await?;
    Ok(Json(exercise))
}
