use spotter_core::ApplicationError;
use spotter_domain::models::workout::Workout;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdateWorkout},
    dto::WorkoutResponse,
    validation::{ensure_not_blank, ensure_owned},
};

pub struct UpdateWorkoutCommandHandler {}

impl Default for UpdateWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateWorkout> for UpdateWorkoutCommandHandler {
    async fn handle(
        &self,
        command: UpdateWorkout,
        ctx: &AppContext,
    ) -> Result<WorkoutResponse, ApplicationError> {
        ensure_not_blank(&command.name, "name")?;

        let workout = ctx.repository.get::<Workout>(command.workout_id).await?;
        let mut workout = ensure_owned(workout, command.workout_id, command.user_id)?;

        workout.update(command.name, command.notes, command.exercises, ctx.now());
        ctx.repository.put(&workout).await?;

        Ok(WorkoutResponse::from(&workout))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::ErrorKind;
    use spotter_domain::test_utils::{WorkoutFactoryOptions, workout_factory};

    use super::*;
    use crate::test_utils::tests::{test_context, test_now};

    #[tokio::test]
    async fn test_update_workout() {
        let test_ctx = test_context();
        let workout = workout_factory(WorkoutFactoryOptions::default());
        test_ctx.store.seed(&workout);

        let response = UpdateWorkoutCommandHandler::new()
            .handle(
                UpdateWorkout {
                    user_id: workout.owner_id,
                    workout_id: workout.id,
                    name: "Deload".to_string(),
                    notes: None,
                    exercises: vec![],
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        assert_eq!(response.name, "Deload");
        assert_eq!(response.total_sets, 0);
        let stored = test_ctx.store.document::<Workout>(workout.id).unwrap();
        assert_eq!(stored.updated_at, test_now());
        assert_eq!(stored.created_at, workout.created_at);
    }

    #[tokio::test]
    async fn test_update_someone_elses_workout() {
        let test_ctx = test_context();
        let workout = workout_factory(WorkoutFactoryOptions::default());
        test_ctx.store.seed(&workout);

        let err = UpdateWorkoutCommandHandler::new()
            .handle(
                UpdateWorkout {
                    user_id: Uuid::new_v4(),
                    workout_id: workout.id,
                    name: "Hijacked".to_string(),
                    notes: None,
                    exercises: vec![],
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert!(test_ctx.store.writes().is_empty());
    }
}
