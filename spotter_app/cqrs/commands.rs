use uuid::Uuid;

use spotter_domain::models::{
    complaint::ComplaintReason,
    user::{Preferences, WeightUnit},
    workout::WorkoutExercise,
};

use crate::{
    cqrs::Command,
    dto::{
        ComplaintResponse, ExerciseResponse, FriendResponse, ReceivedWorkoutResponse,
        UserResponse, WorkoutResponse,
    },
};

// Users

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

impl Command for CreateUser {
    type Output = UserResponse;
    const NAME: &'static str = "CreateUser";
}

#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: Uuid,
}

impl Command for GetUser {
    type Output = UserResponse;
    const NAME: &'static str = "GetUser";
}

#[derive(Debug, Clone)]
pub struct UpdateUsername {
    pub user_id: Uuid,
    pub username: String,
}

impl Command for UpdateUsername {
    type Output = UserResponse;
    const NAME: &'static str = "UpdateUsername";
}

#[derive(Debug, Clone)]
pub struct UpdateUserIcon {
    pub user_id: Uuid,
    pub image: Vec<u8>,
    pub content_type: String,
}

impl Command for UpdateUserIcon {
    type Output = UserResponse;
    const NAME: &'static str = "UpdateUserIcon";
}

#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: Uuid,
}

impl Command for DeleteUser {
    type Output = ();
    const NAME: &'static str = "DeleteUser";
}

/// Replaces every preference at once.
#[derive(Debug, Clone)]
pub struct UpdatePreferences {
    pub user_id: Uuid,
    pub preferences: Preferences,
}

impl Command for UpdatePreferences {
    type Output = UserResponse;
    const NAME: &'static str = "UpdatePreferences";
}

/// Patches only the provided settings. Outputs whether anything changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettings {
    pub user_id: Uuid,
    pub weight_unit: Option<WeightUnit>,
    pub notifications_enabled: Option<bool>,
    pub private_profile: Option<bool>,
}

impl Command for UpdateSettings {
    type Output = bool;
    const NAME: &'static str = "UpdateSettings";
}

#[derive(Debug, Clone)]
pub struct RegisterNotificationToken {
    pub user_id: Uuid,
    pub token: String,
}

impl Command for RegisterNotificationToken {
    type Output = bool;
    const NAME: &'static str = "RegisterNotificationToken";
}

#[derive(Debug, Clone)]
pub struct RemoveNotificationToken {
    pub user_id: Uuid,
    pub token: String,
}

impl Command for RemoveNotificationToken {
    type Output = bool;
    const NAME: &'static str = "RemoveNotificationToken";
}

// Friends

#[derive(Debug, Clone)]
pub struct SendFriendRequest {
    pub user_id: Uuid,
    pub recipient_id: Uuid,
}

impl Command for SendFriendRequest {
    type Output = ();
    const NAME: &'static str = "SendFriendRequest";
}

#[derive(Debug, Clone)]
pub struct AcceptFriendRequest {
    pub user_id: Uuid,
    pub requester_id: Uuid,
}

impl Command for AcceptFriendRequest {
    type Output = ();
    const NAME: &'static str = "AcceptFriendRequest";
}

#[derive(Debug, Clone)]
pub struct DeclineFriendRequest {
    pub user_id: Uuid,
    pub requester_id: Uuid,
}

impl Command for DeclineFriendRequest {
    type Output = ();
    const NAME: &'static str = "DeclineFriendRequest";
}

#[derive(Debug, Clone)]
pub struct RemoveFriend {
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

impl Command for RemoveFriend {
    type Output = ();
    const NAME: &'static str = "RemoveFriend";
}

#[derive(Debug, Clone)]
pub struct GetFriends {
    pub user_id: Uuid,
}

impl Command for GetFriends {
    type Output = Vec<FriendResponse>;
    const NAME: &'static str = "GetFriends";
}

// Complaints

#[derive(Debug, Clone)]
pub struct ReportUser {
    pub user_id: Uuid,
    pub reported_user_id: Uuid,
    pub reason: ComplaintReason,
    pub description: Option<String>,
}

impl Command for ReportUser {
    type Output = ComplaintResponse;
    const NAME: &'static str = "ReportUser";
}

#[derive(Debug, Clone)]
pub struct WithdrawComplaint {
    pub user_id: Uuid,
    pub complaint_id: Uuid,
}

impl Command for WithdrawComplaint {
    type Output = ();
    const NAME: &'static str = "WithdrawComplaint";
}

// Exercises

#[derive(Debug, Clone)]
pub struct AddExercise {
    pub user_id: Uuid,
    pub name: String,
    pub muscle_group: Option<String>,
    pub notes: Option<String>,
}

impl Command for AddExercise {
    type Output = ExerciseResponse;
    const NAME: &'static str = "AddExercise";
}

#[derive(Debug, Clone)]
pub struct UpdateExercise {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub name: String,
    pub muscle_group: Option<String>,
    pub notes: Option<String>,
}

impl Command for UpdateExercise {
    type Output = ExerciseResponse;
    const NAME: &'static str = "UpdateExercise";
}

#[derive(Debug, Clone)]
pub struct DeleteExercise {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
}

impl Command for DeleteExercise {
    type Output = ();
    const NAME: &'static str = "DeleteExercise";
}

#[derive(Debug, Clone)]
pub struct ListExercises {
    pub user_id: Uuid,
}

impl Command for ListExercises {
    type Output = Vec<ExerciseResponse>;
    const NAME: &'static str = "ListExercises";
}

// Workouts

#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Command for CreateWorkout {
    type Output = WorkoutResponse;
    const NAME: &'static str = "CreateWorkout";
}

#[derive(Debug, Clone)]
pub struct GetWorkout {
    pub user_id: Uuid,
    pub workout_id: Uuid,
}

impl Command for GetWorkout {
    type Output = WorkoutResponse;
    const NAME: &'static str = "GetWorkout";
}

#[derive(Debug, Clone)]
pub struct UpdateWorkout {
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Command for UpdateWorkout {
    type Output = WorkoutResponse;
    const NAME: &'static str = "UpdateWorkout";
}

#[derive(Debug, Clone)]
pub struct DeleteWorkout {
    pub user_id: Uuid,
    pub workout_id: Uuid,
}

impl Command for DeleteWorkout {
    type Output = ();
    const NAME: &'static str = "DeleteWorkout";
}

#[derive(Debug, Clone)]
pub struct ListWorkouts {
    pub user_id: Uuid,
}

impl Command for ListWorkouts {
    type Output = Vec<WorkoutResponse>;
    const NAME: &'static str = "ListWorkouts";
}

// Sharing

/// Sends a copy of a workout to each recipient. Outputs the ids of the
/// created received workouts, in recipient order.
#[derive(Debug, Clone)]
pub struct ShareWorkout {
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub recipient_ids: Vec<Uuid>,
}

impl Command for ShareWorkout {
    type Output = Vec<Uuid>;
    const NAME: &'static str = "ShareWorkout";
}

#[derive(Debug, Clone)]
pub struct ListReceivedWorkouts {
    pub user_id: Uuid,
}

impl Command for ListReceivedWorkouts {
    type Output = Vec<ReceivedWorkoutResponse>;
    const NAME: &'static str = "ListReceivedWorkouts";
}

#[derive(Debug, Clone)]
pub struct AcceptReceivedWorkout {
    pub user_id: Uuid,
    pub received_workout_id: Uuid,
}

impl Command for AcceptReceivedWorkout {
    type Output = WorkoutResponse;
    const NAME: &'static str = "AcceptReceivedWorkout";
}

#[derive(Debug, Clone)]
pub struct DeclineReceivedWorkout {
    pub user_id: Uuid,
    pub received_workout_id: Uuid,
}

impl Command for DeclineReceivedWorkout {
    type Output = bool;
    const NAME: &'static str = "DeclineReceivedWorkout";
}

/// Older decline flow: does not require the workout to still be listed
/// on the user.
#[derive(Debug, Clone)]
pub struct DeclineSharedWorkout {
    pub user_id: Uuid,
    pub shared_workout_id: Uuid,
}

impl Command for DeclineSharedWorkout {
    type Output = ();
    const NAME: &'static str = "DeclineSharedWorkout";
}
