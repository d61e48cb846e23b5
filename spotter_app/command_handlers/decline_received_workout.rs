use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::received_workout::ReceivedWorkout;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::DeclineReceivedWorkout},
    repository::WriteBatch,
    validation::ensure_owned,
};

pub struct DeclineReceivedWorkoutCommandHandler {}

impl Default for DeclineReceivedWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclineReceivedWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeclineReceivedWorkout> for DeclineReceivedWorkoutCommandHandler {
    /// Removes the workout from the user's list and deletes the shared copy
    /// in a single batch write.
    async fn handle(
        &self,
        command: DeclineReceivedWorkout,
        ctx: &AppContext,
    ) -> Result<bool, ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;
        if !user.has_received_workout(command.received_workout_id) {
            return Err(DomainError::ReceivedWorkoutNotFound(command.received_workout_id).into());
        }

        let received = ctx
            .repository
            .get::<ReceivedWorkout>(command.received_workout_id)
            .await?;
        let received = ensure_owned(received, command.received_workout_id, user.id)?;

        user.remove_received_workout(received.id, ctx.now());

        let mut batch = WriteBatch::new();
        batch.put(&user)?;
        batch.delete::<ReceivedWorkout>(received.id);
        ctx.repository.batch_write(batch).await?;

        Ok(true)
    }
}
