use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdatePreferences},
    dto::UserResponse,
};

pub struct UpdatePreferencesCommandHandler {}

impl Default for UpdatePreferencesCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePreferencesCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePreferences> for UpdatePreferencesCommandHandler {
    async fn handle(
        &self,
        command: UpdatePreferences,
        ctx: &AppContext,
    ) -> Result<UserResponse, ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;
        user.set_preferences(command.preferences, ctx.now());
        ctx.repository.put(&user).await?;

        Ok(UserResponse::from(&user))
    }
}
