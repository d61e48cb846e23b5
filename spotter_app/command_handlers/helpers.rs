use uuid::Uuid;

use spotter_core::Result;
use spotter_domain::models::user::User;

use crate::{context::AppContext, validation::ensure_found};

/// Loads a user profile, failing with `UserNotFound` when it is missing.
pub async fn load_user(ctx: &AppContext, user_id: Uuid) -> Result<User> {
    let user = ctx.repository.get::<User>(user_id).await?;
    ensure_found(user, user_id)
}
