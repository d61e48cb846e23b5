use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdateSettings},
};

pub struct UpdateSettingsCommandHandler {}

impl Default for UpdateSettingsCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateSettingsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateSettings> for UpdateSettingsCommandHandler {
    async fn handle(&self, command: UpdateSettings, ctx: &AppContext) -> Result<bool, ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;

        let mut preferences = user.preferences.clone();
        if let Some(weight_unit) = command.weight_unit {
            preferences.weight_unit = weight_unit;
        }
        if let Some(enabled) = command.notifications_enabled {
            preferences.notifications_enabled = enabled;
        }
        if let Some(private_profile) = command.private_profile {
            preferences.private_profile = private_profile;
        }

        if preferences == user.preferences {
            return Ok(false);
        }

        user.set_preferences(preferences, ctx.now());
        ctx.repository.put(&user).await?;
        Ok(true)
    }
}
