use tracing::{info, warn};

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::user::User;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::RemoveFriend},
    repository::WriteBatch,
};

pub struct RemoveFriendCommandHandler {}

impl Default for RemoveFriendCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveFriendCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RemoveFriend> for RemoveFriendCommandHandler {
    async fn handle(&self, command: RemoveFriend, ctx: &AppContext) -> Result<(), ApplicationError> {
        let now = ctx.now();
        let mut user = load_user(ctx, command.user_id).await?;

        if !user.remove_friend(command.friend_id, now) {
            return Err(DomainError::FriendNotFound {
                user_id: user.id,
                friend_id: command.friend_id,
            }
            .into());
        }

        let mut batch = WriteBatch::new();
        batch.put(&user)?;

        match ctx.repository.get::<User>(command.friend_id).await? {
            Some(mut friend) => {
                friend.remove_friend(user.id, now);
                batch.put(&friend)?;
            }
            None => {
                warn!(
                    user_id = %user.id,
                    friend_id = %command.friend_id,
                    "Friend document missing, removing one side only."
                );
            }
        }

        ctx.repository.batch_write(batch).await?;

        info!(user_id = %user.id, friend_id = %command.friend_id, "Friend removed.");

        Ok(())
    }
}
