pub mod complaint;
pub mod exercise;
pub mod received_workout;
pub mod user;
pub mod workout;
