use spotter_core::ApplicationError;
use spotter_domain::models::workout::Workout;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::DeleteWorkout},
    repository::WriteBatch,
    validation::ensure_owned,
};

pub struct DeleteWorkoutCommandHandler {}

impl Default for DeleteWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteWorkout> for DeleteWorkoutCommandHandler {
    async fn handle(&self, command: DeleteWorkout, ctx: &AppContext) -> Result<(), ApplicationError> {
        let workout = ctx.repository.get::<Workout>(command.workout_id).await?;
        let workout = ensure_owned(workout, command.workout_id, command.user_id)?;

        let mut batch = WriteBatch::new();
        batch.delete::<Workout>(workout.id);
        ctx.repository.batch_write(batch).await
    }
}
