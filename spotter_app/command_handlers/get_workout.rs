use spotter_core::ApplicationError;
use spotter_domain::models::workout::Workout;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::GetWorkout},
    dto::WorkoutResponse,
    validation::ensure_owned,
};

pub struct GetWorkoutCommandHandler {}

impl Default for GetWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<GetWorkout> for GetWorkoutCommandHandler {
    async fn handle(
        &self,
        command: GetWorkout,
        ctx: &AppContext,
    ) -> Result<WorkoutResponse, ApplicationError> {
        let workout = ctx.repository.get::<Workout>(command.workout_id).await?;
        let workout = ensure_owned(workout, command.workout_id, command.user_id)?;

        Ok(WorkoutResponse::from(&workout))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::{DomainError, ErrorKind};
    use spotter_domain::{
        Collection,
        test_utils::{WorkoutFactoryOptions, workout_factory},
    };

    use super::*;
    use crate::test_utils::tests::{StoreCall, test_context};

    #[tokio::test]
    async fn test_get_own_workout() {
        let test_ctx = test_context();
        let workout = workout_factory(WorkoutFactoryOptions::default());
        test_ctx.store.seed(&workout);

        let response = GetWorkoutCommandHandler::new()
            .handle(
                GetWorkout {
                    user_id: workout.owner_id,
                    workout_id: workout.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        assert_eq!(response, WorkoutResponse::from(&workout));
    }

    #[tokio::test]
    async fn test_get_someone_elses_workout_is_forbidden() {
        let test_ctx = test_context();
        let workout = workout_factory(WorkoutFactoryOptions::default());
        test_ctx.store.seed(&workout);
        let stranger = Uuid::new_v4();

        let err = GetWorkoutCommandHandler::new()
            .handle(
                GetWorkout {
                    user_id: stranger,
                    workout_id: workout.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::NotOwner { user_id, .. }) if user_id == stranger
        ));
        assert_eq!(
            test_ctx.store.calls(),
            vec![StoreCall::Get {
                collection: Collection::Workouts,
                id: workout.id,
            }]
        );
        assert_eq!(test_ctx.store.document::<Workout>(workout.id).unwrap(), workout);
    }

    #[tokio::test]
    async fn test_get_missing_workout() {
        let test_ctx = test_context();

        let err = GetWorkoutCommandHandler::new()
            .handle(
                GetWorkout {
                    user_id: Uuid::new_v4(),
                    workout_id: Uuid::new_v4(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
