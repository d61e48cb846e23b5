use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::DomainError;

use crate::{
    document::{Collection, Document, Owned},
    models::{
        user::User,
        workout::{Workout, WorkoutExercise},
    },
};

/// A copy of a workout sent by one user to a friend, waiting to be
/// accepted or declined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedWorkout {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub sender_id: Uuid,
    pub sender_username: String,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub sent_at: DateTime<Utc>,
}

impl ReceivedWorkout {
    pub fn from_workout(
        workout: &Workout,
        sender: &User,
        recipient_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            sender_id: sender.id,
            sender_username: sender.username.clone(),
            name: workout.name.clone(),
            notes: workout.notes.clone(),
            exercises: workout.exercises.clone(),
            sent_at: now,
        }
    }

    /// Turns the shared copy into a workout owned by the recipient.
    pub fn into_workout(self, now: DateTime<Utc>) -> Workout {
        Workout::new(self.recipient_id, self.name, self.notes, self.exercises, now)
    }
}

impl Document for ReceivedWorkout {
    const COLLECTION: Collection = Collection::ReceivedWorkouts;

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::ReceivedWorkoutNotFound(id)
    }
}

impl Owned for ReceivedWorkout {
    const RESOURCE: &'static str = "received workout";

    fn owner_id(&self) -> Uuid {
        self.recipient_id
    }
}
