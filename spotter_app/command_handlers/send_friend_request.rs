use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::user::User;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::SendFriendRequest},
    services::{Notification, notify_best_effort},
    validation::{ensure_found, ensure_not_self, ensure_unique},
};

pub struct SendFriendRequestCommandHandler {}

impl Default for SendFriendRequestCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SendFriendRequestCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SendFriendRequest> for SendFriendRequestCommandHandler {
    async fn handle(&self, command: SendFriendRequest, ctx: &AppContext) -> Result<(), ApplicationError> {
        ensure_not_self(command.user_id, command.recipient_id)?;

        let sender = load_user(ctx, command.user_id).await?;
        let recipient = ctx.repository.get::<User>(command.recipient_id).await?;
        let mut recipient = ensure_found(recipient, command.recipient_id)?;

        ensure_unique(sender.is_friend(recipient.id), || {
            DomainError::AlreadyFriends(recipient.id)
        })?;
        // A request in the other direction must be accepted, not mirrored.
        ensure_unique(
            recipient.has_friend_request_from(sender.id) || sender.has_friend_request_from(recipient.id),
            || DomainError::FriendRequestAlreadyPending(recipient.id),
        )?;

        recipient.receive_friend_request(sender.id, ctx.now());
        ctx.repository.put(&recipient).await?;

        info!(from = %sender.id, to = %recipient.id, "Friend request sent.");

        notify_best_effort(
            ctx.notifier.as_ref(),
            &recipient,
            Notification::friend_request(&sender),
        )
        .await;

        Ok(())
    }
}
