use std::cmp::Reverse;

use spotter_core::ApplicationError;
use spotter_domain::models::received_workout::ReceivedWorkout;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::ListReceivedWorkouts},
    dto::ReceivedWorkoutResponse,
};

pub struct ListReceivedWorkoutsCommandHandler {}

impl Default for ListReceivedWorkoutsCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListReceivedWorkoutsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ListReceivedWorkouts> for ListReceivedWorkoutsCommandHandler {
    async fn handle(
        &self,
        command: ListReceivedWorkouts,
        ctx: &AppContext,
    ) -> Result<Vec<ReceivedWorkoutResponse>, ApplicationError> {
        let mut received = ctx
            .repository
            .find_by::<ReceivedWorkout>("recipient_id", command.user_id)
            .await?;
        received.sort_by_key(|r| Reverse(r.sent_at));

        Ok(received.iter().map(ReceivedWorkoutResponse::from).collect())
    }
}
