use std::cmp::Reverse;

use spotter_core::ApplicationError;
use spotter_domain::models::workout::Workout;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::ListWorkouts},
    dto::WorkoutResponse,
};

pub struct ListWorkoutsCommandHandler {}

impl Default for ListWorkoutsCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListWorkoutsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ListWorkouts> for ListWorkoutsCommandHandler {
    async fn handle(
        &self,
        command: ListWorkouts,
        ctx: &AppContext,
    ) -> Result<Vec<WorkoutResponse>, ApplicationError> {
        let mut workouts = ctx
            .repository
            .find_by::<Workout>("owner_id", command.user_id)
            .await?;
        // Newest first
        workouts.sort_by_key(|w| Reverse(w.created_at));

        Ok(workouts.iter().map(WorkoutResponse::from).collect())
    }
}
