use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::DomainError;

use crate::document::{Collection, Document, Owned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub reps: u32,
    /// Weight in the owner's preferred unit.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_name: String,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    pub fn new(
        owner_id: Uuid,
        name: String,
        notes: Option<String>,
        exercises: Vec<WorkoutExercise>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.trim().to_string(),
            notes,
            exercises,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: String,
        notes: Option<String>,
        exercises: Vec<WorkoutExercise>,
        now: DateTime<Utc>,
    ) {
        self.name = name.trim().to_string();
        self.notes = notes;
        self.exercises = exercises;
        self.updated_at = now;
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

impl Document for Workout {
    const COLLECTION: Collection = Collection::Workouts;

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::WorkoutNotFound(id)
    }
}

impl Owned for Workout {
    const RESOURCE: &'static str = "workout";

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}
