use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::exercise::Exercise;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::AddExercise},
    dto::ExerciseResponse,
    validation::{ensure_not_blank, ensure_unique, ensure_within_limit},
};

pub struct AddExerciseCommandHandler {}

impl Default for AddExerciseCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddExerciseCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddExercise> for AddExerciseCommandHandler {
    async fn handle(
        &self,
        command: AddExercise,
        ctx: &AppContext,
    ) -> Result<ExerciseResponse, ApplicationError> {
        ensure_not_blank(&command.name, "name")?;

        let user = load_user(ctx, command.user_id).await?;
        let existing = ctx
            .repository
            .find_by::<Exercise>("owner_id", user.id)
            .await?;

        ensure_unique(existing.iter().any(|e| e.has_name(&command.name)), || {
            DomainError::ExerciseAlreadyExists(command.name.trim().to_string())
        })?;
        ensure_within_limit(
            existing.len(),
            ctx.config.exercise_limit_for(&user),
            |limit| DomainError::ExerciseLimitReached { limit },
        )?;

        let exercise = Exercise::new(
            user.id,
            command.name,
            command.muscle_group,
            command.notes,
            ctx.now(),
        );
        ctx.repository.put(&exercise).await?;

        info!(exercise_id = %exercise.id, user_id = %user.id, "Exercise added.");

        Ok(ExerciseResponse::from(&exercise))
    }
}
