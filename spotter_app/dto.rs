use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_domain::models::{
    complaint::{Complaint, ComplaintReason},
    exercise::Exercise,
    received_workout::ReceivedWorkout,
    user::{AccountTier, Preferences, User},
    workout::{Workout, WorkoutExercise},
};

/// The caller's own profile. Friend lists and tokens are not echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub icon_url: Option<String>,
    pub tier: AccountTier,
    pub preferences: Preferences,
    pub friend_count: usize,
    pub pending_friend_requests: Vec<Uuid>,
    pub pending_received_workouts: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            icon_url: user.icon_url.clone(),
            tier: user.tier,
            preferences: user.preferences.clone(),
            friend_count: user.friends.len(),
            pending_friend_requests: user.incoming_friend_requests.clone(),
            pending_received_workouts: user.received_workouts.len(),
            created_at: user.created_at,
        }
    }
}

/// Public view of another user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendResponse {
    pub id: Uuid,
    pub username: String,
    pub icon_url: Option<String>,
}

impl From<&User> for FriendResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            icon_url: user.icon_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            muscle_group: exercise.muscle_group.clone(),
            notes: exercise.notes.clone(),
            updated_at: exercise.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub total_sets: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutResponse {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            name: workout.name.clone(),
            notes: workout.notes.clone(),
            exercises: workout.exercises.clone(),
            total_sets: workout.total_sets(),
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedWorkoutResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_username: String,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub sent_at: DateTime<Utc>,
}

impl From<&ReceivedWorkout> for ReceivedWorkoutResponse {
    fn from(received: &ReceivedWorkout) -> Self {
        Self {
            id: received.id,
            sender_id: received.sender_id,
            sender_username: received.sender_username.clone(),
            name: received.name.clone(),
            notes: received.notes.clone(),
            exercises: received.exercises.clone(),
            sent_at: received.sent_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub reported_user_id: Uuid,
    pub reason: ComplaintReason,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Complaint> for ComplaintResponse {
    fn from(complaint: &Complaint) -> Self {
        Self {
            id: complaint.id,
            reported_user_id: complaint.reported_user_id,
            reason: complaint.reason,
            description: complaint.description.clone(),
            created_at: complaint.created_at,
        }
    }
}
