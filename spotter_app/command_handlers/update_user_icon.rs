use tracing::warn;

use spotter_core::{ApplicationError, DomainError};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdateUserIcon},
    dto::UserResponse,
    services::{image_extension, stored_icon_key, user_icon_key},
};

pub struct UpdateUserIconCommandHandler {}

impl Default for UpdateUserIconCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateUserIconCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateUserIcon> for UpdateUserIconCommandHandler {
    /// The profile is written first; a failed upload leaves the new URL in
    /// place and is only logged.
    async fn handle(
        &self,
        command: UpdateUserIcon,
        ctx: &AppContext,
    ) -> Result<UserResponse, ApplicationError> {
        if command.image.is_empty() {
            return Err(DomainError::BlankField("image").into());
        }
        let extension = image_extension(&command.content_type)
            .ok_or_else(|| DomainError::UnsupportedImageType(command.content_type.clone()))?;

        let mut user = load_user(ctx, command.user_id).await?;
        let previous_key = user
            .icon_url
            .as_deref()
            .and_then(|url| stored_icon_key(user.id, url));
        let key = user_icon_key(user.id, extension);
        user.set_icon_url(ctx.images.url_for(&key), ctx.now());
        ctx.repository.put(&user).await?;

        if let Some(previous_key) = previous_key.filter(|k| *k != key) {
            if let Err(e) = ctx.images.delete(&previous_key).await {
                warn!(user_id = %user.id, "Old icon cleanup failed: {e}");
            }
        }

        if let Err(e) = ctx
            .images
            .upload(&key, &command.image, &command.content_type)
            .await
        {
            warn!(user_id = %user.id, "Icon upload failed: {e}");
        }

        Ok(UserResponse::from(&user))
    }
}
