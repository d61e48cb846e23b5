mod helpers;

mod accept_friend_request;
mod accept_received_workout;
mod add_exercise;
mod create_user;
mod create_workout;
mod decline_friend_request;
mod decline_received_workout;
mod decline_shared_workout;
mod delete_exercise;
mod delete_user;
mod delete_workout;
mod get_friends;
mod get_user;
mod get_workout;
mod list_exercises;
mod list_received_workouts;
mod list_workouts;
mod register_notification_token;
mod remove_friend;
mod remove_notification_token;
mod report_user;
mod send_friend_request;
mod share_workout;
mod update_exercise;
mod update_preferences;
mod update_settings;
mod update_user_icon;
mod update_username;
mod update_workout;
mod withdraw_complaint;

pub use accept_friend_request::*;
pub use accept_received_workout::*;
pub use add_exercise::*;
pub use create_user::*;
pub use create_workout::*;
pub use decline_friend_request::*;
pub use decline_received_workout::*;
pub use decline_shared_workout::*;
pub use delete_exercise::*;
pub use delete_user::*;
pub use delete_workout::*;
pub use get_friends::*;
pub use get_user::*;
pub use get_workout::*;
pub use list_exercises::*;
pub use list_received_workouts::*;
pub use list_workouts::*;
pub use register_notification_token::*;
pub use remove_friend::*;
pub use remove_notification_token::*;
pub use report_user::*;
pub use send_friend_request::*;
pub use share_workout::*;
pub use update_exercise::*;
pub use update_preferences::*;
pub use update_settings::*;
pub use update_user_icon::*;
pub use update_username::*;
pub use update_workout::*;
pub use withdraw_complaint::*;
