use spotter_core::{ApplicationError, DomainError};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::DeclineFriendRequest},
};

pub struct DeclineFriendRequestCommandHandler {}

impl Default for DeclineFriendRequestCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclineFriendRequestCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeclineFriendRequest> for DeclineFriendRequestCommandHandler {
    async fn handle(&self, command: DeclineFriendRequest, ctx: &AppContext) -> Result<(), ApplicationError> {
        let mut user = load_user(ctx, command.user_id).await?;

        if !user.remove_friend_request(command.requester_id, ctx.now()) {
            return Err(DomainError::FriendRequestNotFound {
                user_id: user.id,
                requester_id: command.requester_id,
            }
            .into());
        }

        ctx.repository.put(&user).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::ErrorKind;
    use spotter_domain::{
        models::user::User,
        test_utils::{UserFactoryOptions, user_factory},
    };

    use super::*;
    use crate::test_utils::tests::{StoreCall, test_context};

    #[tokio::test]
    async fn test_decline_friend_request_is_a_single_put() {
        let test_ctx = test_context();
        let requester_id = Uuid::new_v4();
        let user = user_factory(UserFactoryOptions {
            incoming_friend_requests: Some(vec![requester_id]),
            ..Default::default()
        });
        test_ctx.store.seed(&user);

        DeclineFriendRequestCommandHandler::new()
            .handle(
                DeclineFriendRequest {
                    user_id: user.id,
                    requester_id,
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap();

        let writes = test_ctx.store.writes();
        assert_eq!(writes.len(), 1);
        assert!(matches!(writes[0], StoreCall::Put { id, .. } if id == user.id));
        assert!(
            test_ctx
                .store
                .document::<User>(user.id)
                .unwrap()
                .incoming_friend_requests
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_decline_unknown_request() {
        let test_ctx = test_context();
        let user = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&user);

        let err = DeclineFriendRequestCommandHandler::new()
            .handle(
                DeclineFriendRequest {
                    user_id: user.id,
                    requester_id: Uuid::new_v4(),
                },
                &test_ctx.ctx,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
