use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::{received_workout::ReceivedWorkout, workout::Workout};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::AcceptReceivedWorkout},
    dto::WorkoutResponse,
    repository::WriteBatch,
    validation::{ensure_owned, ensure_within_limit},
};

pub struct AcceptReceivedWorkoutCommandHandler {}

impl Default for AcceptReceivedWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceptReceivedWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AcceptReceivedWorkout> for AcceptReceivedWorkoutCommandHandler {
    async fn handle(
        &self,
        command: AcceptReceivedWorkout,
        ctx: &AppContext,
    ) -> Result<WorkoutResponse, ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;
        if !user.has_received_workout(command.received_workout_id) {
            return Err(DomainError::ReceivedWorkoutNotFound(command.received_workout_id).into());
        }

        let received = ctx
            .repository
            .get::<ReceivedWorkout>(command.received_workout_id)
            .await?;
        let received = ensure_owned(received, command.received_workout_id, user.id)?;

        let owned = ctx
            .repository
            .find_by::<Workout>("owner_id", user.id)
            .await?;
        ensure_within_limit(
            owned.len(),
            ctx.config.workout_limit_for(&user),
            |limit| DomainError::WorkoutLimitReached { limit },
        )?;

        let now = ctx.now();
        let received_id = received.id;
        let sender_id = received.sender_id;
        let workout = received.into_workout(now);
        user.remove_received_workout(received_id, now);

        let mut batch = WriteBatch::new();
        batch.put(&user)?.put(&workout)?;
        batch.delete::<ReceivedWorkout>(received_id);
        ctx.repository.batch_write(batch).await?;

        info!(
            workout_id = %workout.id,
            user_id = %user.id,
            sender_id = %sender_id,
            "Received workout accepted."
        );

        Ok(WorkoutResponse::from(&workout))
    }
}

#[cfg(test)]
mod tests {
    use spotter_core::ErrorKind;
    use spotter_domain::{
        models::user::User,
        test_utils::{
            ReceivedWorkoutFactoryOptions, UserFactoryOptions, WorkoutFactoryOptions,
            received_workout_factory, user_factory, workout_factory,
        },
    };

    use super::*;
    use crate::{
        config::Config,
        test_utils::tests::{test_context, test_context_with_config},
    };

    fn seed(test_ctx: &crate::test_utils::tests::TestContext) -> (User, ReceivedWorkout) {
        let user = user_factory(UserFactoryOptions::default());
        let received = received_workout_factory(ReceivedWorkoutFactoryOptions {
            recipient_id: Some(user.id),
            ..Default::default()
        });
        let mut user = user;
        user.received_workouts.push(received.id);
        test_ctx.store.seed(&user);
        test_ctx.store.seed(&received);
        (user, received)
    }

    #[tokio::test]
    async fn test_accept_received_workout() {
        let test_ctx = test_context();
        let (user, received) = seed(&test_ctx);

        let response = AcceptReceivedWorkoutCommandHandler::new()
            .handle(
                AcceptReceivedWorkout {
                    user_id: user.id,
                    received_workout_id: received.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        assert_eq!(response.name, received.name);
        assert_eq!(response.exercises, received.exercises);

        let batches = test_ctx.store.batch_writes();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_put::<User>(user.id));
        assert!(batches[0].is_put::<Workout>(response.id));
        assert!(batches[0].is_deleted::<ReceivedWorkout>(received.id));

        let workout = test_ctx.store.document::<Workout>(response.id).unwrap();
        assert_eq!(workout.owner_id, user.id);
        assert!(
            test_ctx
                .store
                .document::<User>(user.id)
                .unwrap()
                .received_workouts
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_accept_respects_workout_limit() {
        let test_ctx = test_context_with_config(Config {
            free_workout_limit: 1,
            ..Default::default()
        });
        let (user, received) = seed(&test_ctx);
        test_ctx.store.seed(&workout_factory(WorkoutFactoryOptions {
            owner_id: Some(user.id),
            ..Default::default()
        }));

        let err = AcceptReceivedWorkoutCommandHandler::new()
            .handle(
                AcceptReceivedWorkout {
                    user_id: user.id,
                    received_workout_id: received.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
        assert!(test_ctx.store.writes().is_empty());
        assert!(test_ctx.store.contains::<ReceivedWorkout>(received.id));
    }

    #[tokio::test]
    async fn test_accept_workout_not_in_list() {
        let test_ctx = test_context();
        let user = user_factory(UserFactoryOptions::default());
        let received = received_workout_factory(ReceivedWorkoutFactoryOptions {
            recipient_id: Some(user.id),
            ..Default::default()
        });
        test_ctx.store.seed(&user);
        test_ctx.store.seed(&received);

        let err = AcceptReceivedWorkoutCommandHandler::new()
            .handle(
                AcceptReceivedWorkout {
                    user_id: user.id,
                    received_workout_id: received.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
