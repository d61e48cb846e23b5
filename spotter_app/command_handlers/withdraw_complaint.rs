use spotter_core::ApplicationError;
use spotter_domain::models::complaint::Complaint;

use crate::{
    context::AppContext,
    cqrs::{CommandHandler, commands::WithdrawComplaint},
    repository::WriteBatch,
    validation::ensure_owned,
};

pub struct WithdrawComplaintCommandHandler {}

impl Default for WithdrawComplaintCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl WithdrawComplaintCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<WithdrawComplaint> for WithdrawComplaintCommandHandler {
    async fn handle(&self, command: WithdrawComplaint, ctx: &AppContext) -> Result<(), ApplicationError> {
        let complaint = ctx.repository.get::<Complaint>(command.complaint_id).await?;
        let complaint = ensure_owned(complaint, command.complaint_id, command.user_id)?;

        let mut batch = WriteBatch::new();
        batch.delete::<Complaint>(complaint.id);
        ctx.repository.batch_write(batch).await
    }
}
