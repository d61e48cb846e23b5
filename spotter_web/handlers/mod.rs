mod complaints_handler;
mod exercises_handler;
mod friends_handler;
mod helpers;
mod received_workouts_handler;
mod users_handler;
mod workouts_handler;

pub use complaints_handler::{ReportUserBody, report_user, withdraw_complaint};
pub use exercises_handler::{
    ExerciseBody, add_exercise, delete_exercise, list_exercises, update_exercise,
};
pub use friends_handler::{
    FriendRequestBody, accept_friend_request, decline_friend_request, get_friends,
    remove_friend, send_friend_request,
};
pub use helpers::*;
pub use received_workouts_handler::{
    accept_received_workout, decline_received_workout, decline_shared_workout,
    list_received_workouts,
};
pub use users_handler::{
    CreateUserBody, NotificationTokenBody, SettingsBody, UsernameBody, create_user,
    delete_user, get_user, register_notification_token, remove_notification_token,
    update_preferences, update_settings, update_user_icon, update_username,
};
pub use workouts_handler::{
    ShareWorkoutBody, ShareWorkoutResponse, WorkoutBody, create_workout, delete_workout,
    get_workout, list_workouts, share_workout, update_workout,
};
