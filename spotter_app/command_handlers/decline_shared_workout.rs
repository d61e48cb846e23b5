use spotter_core::ApplicationError;
use spotter_domain::models::received_workout::ReceivedWorkout;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::DeclineSharedWorkout},
    repository::WriteBatch,
    validation::ensure_owned,
};

/// Older decline path. Unlike `DeclineReceivedWorkoutCommandHandler` it
/// accepts a shared workout that is no longer listed on the user, and still
/// deletes the document.
pub struct DeclineSharedWorkoutCommandHandler {}

impl Default for DeclineSharedWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclineSharedWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeclineSharedWorkout> for DeclineSharedWorkoutCommandHandler {
    async fn handle(&self, command: DeclineSharedWorkout, ctx: &AppContext) -> Result<(), ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;

        let shared = ctx
            .repository
            .get::<ReceivedWorkout>(command.shared_workout_id)
            .await?;
        let shared = ensure_owned(shared, command.shared_workout_id, user.id)?;

        user.remove_received_workout(shared.id, ctx.now());

        let mut batch = WriteBatch::new();
        batch.put(&user)?;
        batch.delete::<ReceivedWorkout>(shared.id);
        ctx.repository.batch_write(batch).await
    }
}
