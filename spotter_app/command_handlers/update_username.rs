use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::UpdateUsername},
    dto::UserResponse,
    validation::ensure_not_blank,
};

pub struct UpdateUsernameCommandHandler {}

impl Default for UpdateUsernameCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateUsernameCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateUsername> for UpdateUsernameCommandHandler {
    async fn handle(
        &self,
        command: UpdateUsername,
        ctx: &AppContext,
    ) -> Result<UserResponse, ApplicationError> {
        ensure_not_blank(&command.username, "username")?;

        let mut user = load_user(ctx, command.user_id).await?;
        user.rename(command.username.trim().to_string(), ctx.now());
        ctx.repository.put(&user).await?;

        Ok(UserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use spotter_core::ErrorKind;
    use spotter_domain::{
        models::user::User,
        test_utils::{UserFactoryOptions, user_factory},
    };

    use super::*;
    use crate::test_utils::tests::{test_context, test_now};

    #[tokio::test]
    async fn test_update_username() {
        let test_ctx = test_context();
        let user = user_factory(UserFactoryOptions {
            username: Some("old-name"),
            ..Default::default()
        });
        test_ctx.store.seed(&user);

        let response = UpdateUsernameCommandHandler::new()
            .handle(
                UpdateUsername {
                    user_id: user.id,
                    username: "new-name ".to_string(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        assert_eq!(response.username, "new-name");
        let stored = test_ctx.store.document::<User>(user.id).unwrap();
        assert_eq!(stored.username, "new-name");
        assert_eq!(stored.updated_at, test_now());
    }

    #[tokio::test]
    async fn test_update_username_rejects_blank() {
        let test_ctx = test_context();
        let user = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&user);

        let err = UpdateUsernameCommandHandler::new()
            .handle(
                UpdateUsername {
                    user_id: user.id,
                    username: "".to_string(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(test_ctx.store.writes().is_empty());
    }
}
