use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::workout::Workout;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::CreateWorkout},
    dto::WorkoutResponse,
    validation::{ensure_not_blank, ensure_within_limit},
};

pub struct CreateWorkoutCommandHandler {}

impl Default for CreateWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateWorkout> for CreateWorkoutCommandHandler {
    async fn handle(
        &self,
        command: CreateWorkout,
        ctx: &AppContext,
    ) -> Result<WorkoutResponse, ApplicationError> {
        ensure_not_blank(&command.name, "name")?;

        let user = load_user(ctx, command.user_id).await?;
        let owned = ctx
            .repository
            .find_by::<Workout>("owner_id", user.id)
            .await?;
        ensure_within_limit(
            owned.len(),
            ctx.config.workout_limit_for(&user),
            |limit| DomainError::WorkoutLimitReached { limit },
        )?;

        let workout = Workout::new(
            user.id,
            command.name,
            command.notes,
            command.exercises,
            ctx.now(),
        );
        ctx.repository.put(&workout).await?;

        info!(
            workout_id = %workout.id,
            user_id = %user.id,
            sets = workout.total_sets(),
            "Workout created."
        );

        Ok(WorkoutResponse::from(&workout))
    }
}
