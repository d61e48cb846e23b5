use tracing::info;
use uuid::Uuid;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::{received_workout::ReceivedWorkout, user::User, workout::Workout};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::ShareWorkout},
    repository::WriteBatch,
    services::{Notification, notify_best_effort},
    validation::{ensure_found, ensure_not_self, ensure_owned},
};

pub struct ShareWorkoutCommandHandler {}

impl Default for ShareWorkoutCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareWorkoutCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ShareWorkout> for ShareWorkoutCommandHandler {
    async fn handle(&self, command: ShareWorkout, ctx: &AppContext) -> Result<Vec<Uuid>, ApplicationError> {
        let mut recipient_ids: Vec<Uuid> = Vec::with_capacity(command.recipient_ids.len());
        for id in command.recipient_ids {
            ensure_not_self(command.user_id, id)?;
            if !recipient_ids.contains(&id) {
                recipient_ids.push(id);
            }
        }
        if recipient_ids.is_empty() {
            return Err(DomainError::NoRecipients.into());
        }

        let sender = load_user(ctx, command.user_id).await?;
        let workout = ctx.repository.get::<Workout>(command.workout_id).await?;
        let workout = ensure_owned(workout, command.workout_id, sender.id)?;

        let now = ctx.now();
        let mut recipients: Vec<User> = Vec::with_capacity(recipient_ids.len());
        let mut shared: Vec<ReceivedWorkout> = Vec::with_capacity(recipient_ids.len());

        for recipient_id in recipient_ids {
            let recipient = ctx.repository.get::<User>(recipient_id).await?;
            let mut recipient = ensure_found(recipient, recipient_id)?;
            if !sender.is_friend(recipient.id) {
                return Err(DomainError::NotFriends {
                    user_id: sender.id,
                    other_id: recipient.id,
                }
                .into());
            }

            let received = ReceivedWorkout::from_workout(&workout, &sender, recipient.id, now);
            recipient.add_received_workout(received.id, now);
            recipients.push(recipient);
            shared.push(received);
        }

        let mut batch = WriteBatch::new();
        for (recipient, received) in recipients.iter().zip(&shared) {
            batch.put(recipient)?.put(received)?;
        }
        ctx.repository.batch_write(batch).await?;

        info!(
            workout_id = %workout.id,
            sender_id = %sender.id,
            recipients = recipients.len(),
            "Workout shared."
        );

        for recipient in &recipients {
            notify_best_effort(
                ctx.notifier.as_ref(),
                recipient,
                Notification::workout_shared(&sender, &workout.name),
            )
            .await;
        }

        Ok(shared.iter().map(|r| r.id).collect())
    }
}
