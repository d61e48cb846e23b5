use tracing::{info, warn};

use spotter_core::ApplicationError;
use spotter_domain::models::{
    complaint::Complaint, exercise::Exercise, received_workout::ReceivedWorkout, user::User,
    workout::Workout,
};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::DeleteUser},
    repository::WriteBatch,
    services::stored_icon_key,
};

pub struct DeleteUserCommandHandler {}

impl Default for DeleteUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteUser> for DeleteUserCommandHandler {
    async fn handle(&self, command: DeleteUser, ctx: &AppContext) -> Result<(), ApplicationError> {
        let user = load_user(ctx, command.user_id).await?;
        let now = ctx.now();
        let repo = &ctx.repository;

        let exercises = repo.find_by::<Exercise>("owner_id", user.id).await?;
        let workouts = repo.find_by::<Workout>("owner_id", user.id).await?;
        let received = repo
            .find_by::<ReceivedWorkout>("recipient_id", user.id)
            .await?;
        let complaints = repo.find_by::<Complaint>("reporter_id", user.id).await?;

        let mut related_ids = user.friends.clone();
        related_ids.extend(
            user.incoming_friend_requests
                .iter()
                .filter(|id| !user.friends.contains(id)),
        );
        let related = repo.get_many::<User>(&related_ids).await?;

        let mut batch = WriteBatch::new();
        for mut other in related {
            if other.forget_user(user.id, now) {
                batch.put(&other)?;
            }
        }
        for exercise in &exercises {
            batch.delete::<Exercise>(exercise.id);
        }
        for workout in &workouts {
            batch.delete::<Workout>(workout.id);
        }
        for received_workout in &received {
            batch.delete::<ReceivedWorkout>(received_workout.id);
        }
        for complaint in &complaints {
            batch.delete::<Complaint>(complaint.id);
        }
        batch.delete::<User>(user.id);

        repo.batch_write(batch).await?;

        if let Some(key) = user
            .icon_url
            .as_deref()
            .and_then(|url| stored_icon_key(user.id, url))
        {
            if let Err(e) = ctx.images.delete(&key).await {
                warn!(user_id = %user.id, "Icon cleanup failed: {e}");
            }
        }

        info!(
            user_id = %user.id,
            exercises = exercises.len(),
            workouts = workouts.len(),
            "User deleted."
        );

        Ok(())
    }
}
