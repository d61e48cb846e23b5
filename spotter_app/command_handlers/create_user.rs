use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::user::User;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::CreateUser},
    dto::UserResponse,
    validation::{ensure_not_blank, ensure_unique},
};

pub struct CreateUserCommandHandler {}

impl Default for CreateUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateUser> for CreateUserCommandHandler {
    async fn handle(
        &self,
        command: CreateUser,
        ctx: &AppContext,
    ) -> Result<UserResponse, ApplicationError> {
        ensure_not_blank(&command.username, "username")?;
        ensure_not_blank(&command.email, "email")?;

        let existing = ctx.repository.get::<User>(command.user_id).await?;
        ensure_unique(existing.is_some(), || {
            DomainError::UserAlreadyExists(command.user_id)
        })?;

        let user = User::new(
            command.user_id,
            command.username.trim().to_string(),
            command.email.trim().to_string(),
            ctx.now(),
        );
        ctx.repository.put(&user).await?;

        info!(user_id = %user.id, username = %user.username, "User created.");

        Ok(UserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::ErrorKind;
    use spotter_domain::test_utils::{UserFactoryOptions, user_factory};

    use super::*;
    use crate::test_utils::tests::{test_context, test_now};

    #[tokio::test]
    async fn test_create_user_success() {
        let test_ctx = test_context();
        let handler = CreateUserCommandHandler::new();
        let user_id = Uuid::new_v4();

        let response = handler
            .handle(
                CreateUser {
                    user_id,
                    username: "  alice ".to_string(),
                    email: "alice@example.com".to_string(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        assert_eq!(response.id, user_id);
        assert_eq!(response.username, "alice");
        assert_eq!(response.created_at, test_now());

        let stored = test_ctx.store.document::<User>(user_id).unwrap();
        assert_eq!(stored.email, "alice@example.com");
        assert!(stored.is_free_tier());
    }

    #[tokio::test]
    async fn test_create_user_rejects_existing_profile() {
        let test_ctx = test_context();
        let existing = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&existing);

        let result = CreateUserCommandHandler::new()
            .handle(
                CreateUser {
                    user_id: existing.id,
                    username: "someone".to_string(),
                    email: "someone@example.com".to_string(),
                },
                &test_ctx.ctx,
            )
            .await;

        match result {
            Err(ApplicationError::Domain(DomainError::UserAlreadyExists(id))) => {
                assert_eq!(id, existing.id)
            }
            other => panic!("Expected UserAlreadyExists error, got: {:?}", other),
        }
        assert!(test_ctx.store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank_username() {
        let test_ctx = test_context();

        let err = CreateUserCommandHandler::new()
            .handle(
                CreateUser {
                    user_id: Uuid::new_v4(),
                    username: "   ".to_string(),
                    email: "blank@example.com".to_string(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(test_ctx.store.calls().is_empty());
    }
}
