use thiserror::Error;
use uuid::Uuid;

use crate::ErrorKind;

/// Errors raised by handlers when a business rule rejects a command.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User with ID {0} not found")]
    UserNotFound(Uuid),

    #[error("Workout with ID {0} not found")]
    WorkoutNotFound(Uuid),

    #[error("Received workout with ID {0} not found")]
    ReceivedWorkoutNotFound(Uuid),

    #[error("Exercise with ID {0} not found")]
    ExerciseNotFound(Uuid),

    #[error("Complaint with ID {0} not found")]
    ComplaintNotFound(Uuid),

    #[error("User {user_id} has no friend {friend_id}")]
    FriendNotFound { user_id: Uuid, friend_id: Uuid },

    #[error("User {user_id} has no pending friend request from {requester_id}")]
    FriendRequestNotFound { user_id: Uuid, requester_id: Uuid },

    #[error("User {user_id} does not own {resource} {id}")]
    NotOwner {
        resource: &'static str,
        id: Uuid,
        user_id: Uuid,
    },

    #[error("User {user_id} is not friends with {other_id}")]
    NotFriends { user_id: Uuid, other_id: Uuid },

    #[error("User with ID {0} already exists")]
    UserAlreadyExists(Uuid),

    #[error("Exercise '{0}' already exists")]
    ExerciseAlreadyExists(String),

    #[error("Already friends with {0}")]
    AlreadyFriends(Uuid),

    #[error("Friend request to {0} already pending")]
    FriendRequestAlreadyPending(Uuid),

    #[error("A complaint against {0} was already filed")]
    ComplaintAlreadyFiled(Uuid),

    #[error("Exercise limit of {limit} reached for this account")]
    ExerciseLimitReached { limit: usize },

    #[error("Workout limit of {limit} reached for this account")]
    WorkoutLimitReached { limit: usize },

    #[error("Users cannot target themselves")]
    CannotTargetSelf,

    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("At least one recipient is required")]
    NoRecipients,

    #[error("Unsupported image type '{0}'")]
    UnsupportedImageType(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        use DomainError::*;

        match self {
            UserNotFound(_)
            | WorkoutNotFound(_)
            | ReceivedWorkoutNotFound(_)
            | ExerciseNotFound(_)
            | ComplaintNotFound(_)
            | FriendNotFound { .. }
            | FriendRequestNotFound { .. } => ErrorKind::NotFound,
            NotOwner { .. } | NotFriends { .. } => ErrorKind::Forbidden,
            UserAlreadyExists(_)
            | ExerciseAlreadyExists(_)
            | AlreadyFriends(_)
            | FriendRequestAlreadyPending(_)
            | ComplaintAlreadyFiled(_) => ErrorKind::Duplicate,
            ExerciseLimitReached { .. } | WorkoutLimitReached { .. } => ErrorKind::LimitExceeded,
            CannotTargetSelf | BlankField(_) | NoRecipients | UnsupportedImageType(_) => {
                ErrorKind::Validation
            }
        }
    }
}
