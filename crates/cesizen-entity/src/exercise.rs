//! Cardiac-coherence breathing exercise entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A guided breathing exercise definition.
///
/// Durations are in seconds; a session runs `number_cycles` repetitions of
/// inspiration, apnea, expiration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BreathingExercise {
    /// Exercise identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Inhale phase duration.
    pub duration_inspiration: f64,
    /// Breath-hold phase duration.
    pub duration_apnea: f64,
    /// Exhale phase duration.
    pub duration_expiration: f64,
    /// Number of cycles per session.
    pub number_cycles: i32,
}
