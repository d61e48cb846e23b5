use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::user::User;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::AcceptFriendRequest},
    repository::WriteBatch,
    validation::ensure_found,
};

pub struct AcceptFriendRequestCommandHandler {}

impl Default for AcceptFriendRequestCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceptFriendRequestCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AcceptFriendRequest> for AcceptFriendRequestCommandHandler {
    async fn handle(&self, command: AcceptFriendRequest, ctx: &AppContext) -> Result<(), ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;
        if !user.has_friend_request_from(command.requester_id) {
            return Err(DomainError::FriendRequestNotFound {
                user_id: user.id,
                requester_id: command.requester_id,
            }
            .into());
        }

        let requester = ctx.repository.get::<User>(command.requester_id).await?;
        let mut requester = ensure_found(requester, command.requester_id)?;

        let now = ctx.now();
        user.add_friend(requester.id, now);
        requester.add_friend(user.id, now);

        let mut batch = WriteBatch::new();
        batch.put(&user)?.put(&requester)?;
        ctx.repository.batch_write(batch).await?;

        info!(user_id = %user.id, friend_id = %requester.id, "Friend request accepted.");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spotter_domain::test_utils::{UserFactoryOptions, user_factory};

    use super::*;
    use crate::test_utils::tests::test_context;

    #[tokio::test]
    async fn test_accept_friend_request() {
        let test_ctx = test_context();
        let requester = user_factory(UserFactoryOptions::default());
        let user = user_factory(UserFactoryOptions {
            incoming_friend_requests: Some(vec![requester.id]),
            ..Default::default()
        });
        test_ctx.store.seed(&user);
        test_ctx.store.seed(&requester);

        AcceptFriendRequestCommandHandler::new()
            .handle(
                AcceptFriendRequest {
                    user_id: user.id,
                    requester_id: requester.id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        let batches = test_ctx.store.batch_writes();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_put::<User>(user.id));
        assert!(batches[0].is_put::<User>(requester.id));

        let user = test_ctx.store.document::<User>(user.id).unwrap();
        assert!(user.is_friend(requester.id));
        assert!(user.incoming_friend_requests.is_empty());
        let requester = test_ctx.store.document::<User>(requester.id).unwrap();
        assert!(requester.is_friend(user.id));
    }

    #[tokio::test]
    async fn test_accept_without_request_fails() {
        let test_ctx = test_context();
        let user = user_factory(UserFactoryOptions::default());
        let stranger = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&user);
        test_ctx.store.seed(&stranger);

        let result = AcceptFriendRequestCommandHandler::new()
            .handle(
                AcceptFriendRequest {
                    user_id: user.id,
                    requester_id: stranger.id,
                },
                &test_ctx.ctx,
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::FriendRequestNotFound { .. }))
        ));
        assert!(test_ctx.store.writes().is_empty());
    }
}
