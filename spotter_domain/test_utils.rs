use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{
    complaint::{Complaint, ComplaintReason},
    exercise::Exercise,
    received_workout::ReceivedWorkout,
    user::{AccountTier, User},
    workout::{Workout, WorkoutExercise, WorkoutSet},
};

/// Fixed instant used by factories, so snapshots compare equal across runs.
pub fn default_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[derive(Default, Clone)]
pub struct UserFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub username: Option<&'a str>,
    pub tier: Option<AccountTier>,
    pub friends: Option<Vec<Uuid>>,
    pub incoming_friend_requests: Option<Vec<Uuid>>,
    pub received_workouts: Option<Vec<Uuid>>,
    pub notification_tokens: Option<Vec<String>>,
}

#[derive(Default, Clone)]
pub struct ExerciseFactoryOptions<'a> {
    pub owner_id: Option<Uuid>,
    pub name: Option<&'a str>,
}

#[derive(Default, Clone)]
pub struct WorkoutFactoryOptions<'a> {
    pub owner_id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Default, Clone)]
pub struct ReceivedWorkoutFactoryOptions {
    pub recipient_id: Option<Uuid>,
    pub sender: Option<User>,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Default, Clone)]
pub struct ComplaintFactoryOptions {
    pub reporter_id: Option<Uuid>,
    pub reported_user_id: Option<Uuid>,
    pub reason: Option<ComplaintReason>,
}

pub fn user_factory(options: UserFactoryOptions) -> User {
    let id = options.id.unwrap_or_else(Uuid::new_v4);
    let username = options
        .username
        .map(str::to_string)
        .unwrap_or_else(|| format!("user-{}", &id.simple().to_string()[..8]));

    let mut user = User::new(id, username.clone(), format!("{username}@example.com"), default_now());
    user.tier = options.tier.unwrap_or(AccountTier::Free);
    user.friends = options.friends.unwrap_or_default();
    user.incoming_friend_requests = options.incoming_friend_requests.unwrap_or_default();
    user.received_workouts = options.received_workouts.unwrap_or_default();
    user.notification_tokens = options.notification_tokens.unwrap_or_default();
    user
}

pub fn exercise_factory(options: ExerciseFactoryOptions) -> Exercise {
    Exercise::new(
        options.owner_id.unwrap_or_else(Uuid::new_v4),
        options.name.unwrap_or("Squat").to_string(),
        Some("legs".to_string()),
        None,
        default_now(),
    )
}

pub fn workout_exercises_factory() -> Vec<WorkoutExercise> {
    vec![
        WorkoutExercise {
            exercise_name: "Squat".to_string(),
            sets: vec![
                WorkoutSet {
                    reps: 5,
                    weight: 120.0,
                },
                WorkoutSet {
                    reps: 5,
                    weight: 125.0,
                },
            ],
        },
        WorkoutExercise {
            exercise_name: "Deadlift".to_string(),
            sets: vec![WorkoutSet {
                reps: 3,
                weight: 160.0,
            }],
        },
    ]
}

pub fn workout_factory(options: WorkoutFactoryOptions) -> Workout {
    Workout::new(
        options.owner_id.unwrap_or_else(Uuid::new_v4),
        options.name.unwrap_or("Leg day").to_string(),
        None,
        workout_exercises_factory(),
        options.created_at.unwrap_or_else(default_now),
    )
}

pub fn received_workout_factory(options: ReceivedWorkoutFactoryOptions) -> ReceivedWorkout {
    let sender = options
        .sender
        .unwrap_or_else(|| user_factory(UserFactoryOptions::default()));
    let workout = workout_factory(WorkoutFactoryOptions {
        owner_id: Some(sender.id),
        ..Default::default()
    });

    ReceivedWorkout::from_workout(
        &workout,
        &sender,
        options.recipient_id.unwrap_or_else(Uuid::new_v4),
        options.sent_at.unwrap_or_else(default_now),
    )
}

pub fn complaint_factory(options: ComplaintFactoryOptions) -> Complaint {
    Complaint::new(
        options.reporter_id.unwrap_or_else(Uuid::new_v4),
        options.reported_user_id.unwrap_or_else(Uuid::new_v4),
        options.reason.unwrap_or(ComplaintReason::Spam),
        None,
        default_now(),
    )
}
