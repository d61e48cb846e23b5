use spotter_core::Result;

use crate::{
    command_handlers::*,
    context::AppContext,
    cqrs::{CommandKey, Dispatcher, commands::*},
};

/// Every command type the application defines.
/// `build_dispatcher` fails if any of them ends up without a handler.
pub fn all_commands() -> Vec<CommandKey> {
    vec![
        // Users
        CommandKey::of::<CreateUser>(),
        CommandKey::of::<GetUser>(),
        CommandKey::of::<UpdateUsername>(),
        CommandKey::of::<UpdateUserIcon>(),
        CommandKey::of::<DeleteUser>(),
        CommandKey::of::<UpdatePreferences>(),
        CommandKey::of::<UpdateSettings>(),
        CommandKey::of::<RegisterNotificationToken>(),
        CommandKey::of::<RemoveNotificationToken>(),
        // Friends
        CommandKey::of::<SendFriendRequest>(),
        CommandKey::of::<AcceptFriendRequest>(),
        CommandKey::of::<DeclineFriendRequest>(),
        CommandKey::of::<RemoveFriend>(),
        CommandKey::of::<GetFriends>(),
        // Complaints
        CommandKey::of::<ReportUser>(),
        CommandKey::of::<WithdrawComplaint>(),
        // Exercises
        CommandKey::of::<AddExercise>(),
        CommandKey::of::<UpdateExercise>(),
        CommandKey::of::<DeleteExercise>(),
        CommandKey::of::<ListExercises>(),
        // Workouts
        CommandKey::of::<CreateWorkout>(),
        CommandKey::of::<GetWorkout>(),
        CommandKey::of::<UpdateWorkout>(),
        CommandKey::of::<DeleteWorkout>(),
        CommandKey::of::<ListWorkouts>(),
        // Sharing
        CommandKey::of::<ShareWorkout>(),
        CommandKey::of::<ListReceivedWorkouts>(),
        CommandKey::of::<AcceptReceivedWorkout>(),
        CommandKey::of::<DeclineReceivedWorkout>(),
        CommandKey::of::<DeclineSharedWorkout>(),
    ]
}

/// Registers every application handler and runs the startup self-check.
pub fn build_dispatcher(ctx: AppContext) -> Result<Dispatcher> {
    let dispatcher = Dispatcher::builder()
        .register::<CreateUser, _>(CreateUserCommandHandler::new())?
        .register::<GetUser, _>(GetUserCommandHandler::new())?
        .register::<UpdateUsername, _>(UpdateUsernameCommandHandler::new())?
        .register::<UpdateUserIcon, _>(UpdateUserIconCommandHandler::new())?
        .register::<DeleteUser, _>(DeleteUserCommandHandler::new())?
        .register::<UpdatePreferences, _>(UpdatePreferencesCommandHandler::new())?
        .register::<UpdateSettings, _>(UpdateSettingsCommandHandler::new())?
        .register::<RegisterNotificationToken, _>(RegisterNotificationTokenCommandHandler::new())?
        .register::<RemoveNotificationToken, _>(RemoveNotificationTokenCommandHandler::new())?
        .register::<SendFriendRequest, _>(SendFriendRequestCommandHandler::new())?
        .register::<AcceptFriendRequest, _>(AcceptFriendRequestCommandHandler::new())?
        .register::<DeclineFriendRequest, _>(DeclineFriendRequestCommandHandler::new())?
        .register::<RemoveFriend, _>(RemoveFriendCommandHandler::new())?
        .register::<GetFriends, _>(GetFriendsCommandHandler::new())?
        .register::<ReportUser, _>(ReportUserCommandHandler::new())?
        .register::<WithdrawComplaint, _>(WithdrawComplaintCommandHandler::new())?
        .register::<AddExercise, _>(AddExerciseCommandHandler::new())?
        .register::<UpdateExercise, _>(UpdateExerciseCommandHandler::new())?
        .register::<DeleteExercise, _>(DeleteExerciseCommandHandler::new())?
        .register::<ListExercises, _>(ListExercisesCommandHandler::new())?
        .register::<CreateWorkout, _>(CreateWorkoutCommandHandler::new())?
        .register::<GetWorkout, _>(GetWorkoutCommandHandler::new())?
        .register::<UpdateWorkout, _>(UpdateWorkoutCommandHandler::new())?
        .register::<DeleteWorkout, _>(DeleteWorkoutCommandHandler::new())?
        .register::<ListWorkouts, _>(ListWorkoutsCommandHandler::new())?
        .register::<ShareWorkout, _>(ShareWorkoutCommandHandler::new())?
        .register::<ListReceivedWorkouts, _>(ListReceivedWorkoutsCommandHandler::new())?
        .register::<AcceptReceivedWorkout, _>(AcceptReceivedWorkoutCommandHandler::new())?
        .register::<DeclineReceivedWorkout, _>(DeclineReceivedWorkoutCommandHandler::new())?
        .register::<DeclineSharedWorkout, _>(DeclineSharedWorkoutCommandHandler::new())?
        .build(ctx);

    dispatcher.ensure_registered(&all_commands())?;
    Ok(dispatcher)
}
