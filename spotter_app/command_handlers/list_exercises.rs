use spotter_core::ApplicationError;
use spotter_domain::models::exercise::Exercise;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::ListExercises},
    dto::ExerciseResponse,
};

pub struct ListExercisesCommandHandler {}

impl Default for ListExercisesCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListExercisesCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ListExercises> for ListExercisesCommandHandler {
    async fn handle(
        &self,
        command: ListExercises,
        ctx: &AppContext,
    ) -> Result<Vec<ExerciseResponse>, ApplicationError> {
        let mut exercises = ctx
            .repository
            .find_by::<Exercise>("owner_id", command.user_id)
            .await?;
        exercises.sort_by_key(|e| e.name.to_lowercase());

        Ok(exercises.iter().map(ExerciseResponse::from).collect())
    }
}
