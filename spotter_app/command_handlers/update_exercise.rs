use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::exercise::Exercise;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdateExercise},
    dto::ExerciseResponse,
    validation::{ensure_not_blank, ensure_owned, ensure_unique},
};

pub struct UpdateExerciseCommandHandler {}

impl Default for UpdateExerciseCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateExerciseCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateExercise> for UpdateExerciseCommandHandler {
    async fn handle(
        &self,
        command: UpdateExercise,
        ctx: &AppContext,
    ) -> Result<ExerciseResponse, ApplicationError> {
        ensure_not_blank(&command.name, "name")?;

        let exercise = ctx.repository.get::<Exercise>(command.exercise_id).await?;
        let mut exercise = ensure_owned(exercise, command.exercise_id, command.user_id)?;

        if !exercise.has_name(&command.name) {
            let siblings = ctx
                .repository
                .find_by::<Exercise>("owner_id", command.user_id)
                .await?;
            ensure_unique(
                siblings
                    .iter()
                    .any(|e| e.id != exercise.id && e.has_name(&command.name)),
                || DomainError::ExerciseAlreadyExists(command.name.trim().to_string()),
            )?;
        }

        exercise.update(command.name, command.muscle_group, command.notes, ctx.now());
        ctx.repository.put(&exercise).await?;

        Ok(ExerciseResponse::from(&exercise))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::ErrorKind;
    use spotter_domain::test_utils::{ExerciseFactoryOptions, exercise_factory};

    use super::*;
    use crate::test_utils::tests::{test_context, test_now};

    fn update(user_id: Uuid, exercise_id: Uuid, name: &str) -> UpdateExercise {
        UpdateExercise {
            user_id,
            exercise_id,
            name: name.to_string(),
            muscle_group: Some("legs".to_string()),
            notes: Some("ass to grass".to_string()),
        }
    }

    #[tokio::test]
    async fn test_update_exercise() {
        let test_ctx = test_context();
        let exercise = exercise_factory(ExerciseFactoryOptions::default());
        test_ctx.store.seed(&exercise);

        let response = UpdateExerciseCommandHandler::new()
            .handle(update(exercise.owner_id, exercise.id, "Front Squat"), &test_ctx.ctx)
            .await
            .unwrap();

        assert_eq!(response.name, "Front Squat");
        assert_eq!(response.updated_at, test_now());
        let stored = test_ctx.store.document::<Exercise>(exercise.id).unwrap();
        assert_eq!(stored.notes.as_deref(), Some("ass to grass"));
    }

    #[tokio::test]
    async fn test_changing_only_case_keeps_the_exercise() {
        let test_ctx = test_context();
        let exercise = exercise_factory(ExerciseFactoryOptions::default());
        test_ctx.store.seed(&exercise);

        let response = UpdateExerciseCommandHandler::new()
            .handle(update(exercise.owner_id, exercise.id, "SQUAT"), &test_ctx.ctx)
            .await
            .unwrap();

        assert_eq!(response.name, "SQUAT");
    }

    #[tokio::test]
    async fn test_rename_onto_existing_name() {
        let test_ctx = test_context();
        let owner_id = Uuid::new_v4();
        let squat = exercise_factory(ExerciseFactoryOptions {
            owner_id: Some(owner_id),
            name: Some("Squat"),
        });
        let deadlift = exercise_factory(ExerciseFactoryOptions {
            owner_id: Some(owner_id),
            name: Some("Deadlift"),
        });
        test_ctx.store.seed(&squat);
        test_ctx.store.seed(&deadlift);

        let err = UpdateExerciseCommandHandler::new()
            .handle(update(owner_id, squat.id, "deadlift"), &test_ctx.ctx)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Duplicate);
        assert!(test_ctx.store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_update_someone_elses_exercise() {
        let test_ctx = test_context();
        let exercise = exercise_factory(ExerciseFactoryOptions::default());
        test_ctx.store.seed(&exercise);

        let err = UpdateExerciseCommandHandler::new()
            .handle(update(Uuid::new_v4(), exercise.id, "Mine now"), &test_ctx.ctx)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
}
