use spotter_core::ApplicationError;

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::GetUser},
    dto::UserResponse,
};

pub struct GetUserCommandHandler {}

impl Default for GetUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<GetUser> for GetUserCommandHandler {
    async fn handle(&self, command: GetUser, ctx: &AppContext) -> Result<UserResponse, ApplicationError> {
        let user = load_user(ctx, command.user_id).await?;
        Ok(UserResponse::from(&user))
    }
}
