use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::RegisterNotificationToken},
    validation::ensure_not_blank,
};

pub struct RegisterNotificationTokenCommandHandler {}

impl Default for RegisterNotificationTokenCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterNotificationTokenCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterNotificationToken> for RegisterNotificationTokenCommandHandler {
    async fn handle(
        &self,
        command: RegisterNotificationToken,
        ctx: &AppContext,
    ) -> Result<bool, ApplicationError> {
        ensure_not_blank(&command.token, "token")?;

        let mut user = load_user(ctx, command.user_id).await?;
        if !user.add_notification_token(command.token.trim().to_string(), ctx.now()) {
            return Ok(false);
        }

        ctx.repository.put(&user).await?;
        Ok(true)
    }
}
