use spotter_core::ApplicationError;
use spotter_domain::models::exercise::Exercise;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::DeleteExercise},
    repository::WriteBatch,
    validation::ensure_owned,
};

pub struct DeleteExerciseCommandHandler {}

impl Default for DeleteExerciseCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteExerciseCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteExercise> for DeleteExerciseCommandHandler {
    async fn handle(&self, command: DeleteExercise, ctx: &AppContext) -> Result<(), ApplicationError> {
        let exercise = ctx.repository.get::<Exercise>(command.exercise_id).await?;
        let exercise = ensure_owned(exercise, command.exercise_id, command.user_id)?;

        let mut batch = WriteBatch::new();
        batch.delete::<Exercise>(exercise.id);
        ctx.repository.batch_write(batch).await
    }
}
