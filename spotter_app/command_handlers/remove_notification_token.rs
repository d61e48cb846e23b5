use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::RemoveNotificationToken},
};

pub struct RemoveNotificationTokenCommandHandler {}

impl Default for RemoveNotificationTokenCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveNotificationTokenCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RemoveNotificationToken> for RemoveNotificationTokenCommandHandler {
    async fn handle(
        &self,
        command: RemoveNotificationToken,
        ctx: &AppContext,
    ) -> Result<bool, ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;
        if !user.remove_notification_token(command.token.trim(), ctx.now()) {
            return Ok(false);
        }

        ctx.repository.put(&user).await?;
        Ok(true)
    }
}
