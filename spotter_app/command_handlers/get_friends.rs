use spotter_core::ApplicationError;
use spotter_domain::models::user::User;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::GetFriends},
    dto::FriendResponse,
};

pub struct GetFriendsCommandHandler {}

impl Default for GetFriendsCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetFriendsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<GetFriends> for GetFriendsCommandHandler {
    async fn handle(
        &self,
        command: GetFriends,
        ctx: &AppContext,
    ) -> Result<Vec<FriendResponse>, ApplicationError> {
        let user = load_user(ctx, command.user_id).await?;
        let friends = ctx.repository.get_many::<User>(&user.friends).await?;

        Ok(friends.iter().map(FriendResponse::from).collect())
    }
}
