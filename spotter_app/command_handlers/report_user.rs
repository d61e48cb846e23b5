use tracing::info;

use spotter_core::{ApplicationError, DomainError};
use spotter_domain::models::{complaint::Complaint, user::User};

use crate::{
    command_handlers::helpers::load_user,
    context::AppContext,
    cqrs::{CommandHandler, commands::ReportUser},
    dto::ComplaintResponse,
    validation::{ensure_found, ensure_not_self, ensure_unique},
};

pub struct ReportUserCommandHandler {}

impl Default for ReportUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ReportUser> for ReportUserCommandHandler {
    async fn handle(
        &self,
        command: ReportUser,
        ctx: &AppContext,
    ) -> Result<ComplaintResponse, ApplicationError> {
        ensure_not_self(command.user_id, command.reported_user_id)?;

        let reporter = load_user(ctx, command.user_id).await?;
        let reported = ctx.repository.get::<User>(command.reported_user_id).await?;
        let reported = ensure_found(reported, command.reported_user_id)?;

        let filed = ctx
            .repository
            .find_by::<Complaint>("reporter_id", reporter.id)
            .await?;
        ensure_unique(
            filed.iter().any(|c| c.reported_user_id == reported.id),
            || DomainError::ComplaintAlreadyFiled(reported.id),
        )?;

        let description = command
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let complaint = Complaint::new(reporter.id, reported.id, command.reason, description, ctx.now());
        ctx.repository.put(&complaint).await?;

        info!(
            complaint_id = %complaint.id,
            reporter_id = %reporter.id,
            reported_user_id = %reported.id,
            reason = ?complaint.reason,
            "Complaint filed."
        );

        Ok(ComplaintResponse::from(&complaint))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use spotter_core::ErrorKind;
    use spotter_domain::{
        models::complaint::ComplaintReason,
        test_utils::{ComplaintFactoryOptions, UserFactoryOptions, complaint_factory, user_factory},
    };

    use super::*;
    use crate::test_utils::tests::test_context;

    fn report(reporter: Uuid, reported: Uuid) -> ReportUser {
        ReportUser {
            user_id: reporter,
            reported_user_id: reported,
            reason: ComplaintReason::Harassment,
            description: Some("  rude comments ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_report_user() {
        let test_ctx = test_context();
        let reporter = user_factory(UserFactoryOptions::default());
        let reported = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&reporter);
        test_ctx.store.seed(&reported);

        let response = ReportUserCommandHandler::new()
            .handle(report(reporter.id, reported.id), &test_ctx.ctx)
            .await
            .unwrap();

        assert_eq!(response.reported_user_id, reported.id);
        assert_eq!(response.description.as_deref(), Some("rude comments"));

        let stored = test_ctx.store.document::<Complaint>(response.id).unwrap();
        assert_eq!(stored.reporter_id, reporter.id);
        assert_eq!(stored.reason, ComplaintReason::Harassment);
    }

    #[tokio::test]
    async fn test_report_same_user_twice() {
        let test_ctx = test_context();
        let reporter = user_factory(UserFactoryOptions::default());
        let reported = user_factory(UserFactoryOptions::default());
        let existing = complaint_factory(ComplaintFactoryOptions {
            reporter_id: Some(reporter.id),
            reported_user_id: Some(reported.id),
            ..Default::default()
        });
        test_ctx.store.seed(&reporter);
        test_ctx.store.seed(&reported);
        test_ctx.store.seed(&existing);

        let result = ReportUserCommandHandler::new()
            .handle(report(reporter.id, reported.id), &test_ctx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::ComplaintAlreadyFiled(id))) if id == reported.id
        ));
        assert!(test_ctx.store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_report_unknown_or_self() {
        let test_ctx = test_context();
        let reporter = user_factory(UserFactoryOptions::default());
        test_ctx.store.seed(&reporter);
        let handler = ReportUserCommandHandler::new();

        let err = handler
            .handle(report(reporter.id, reporter.id), &test_ctx.ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = handler
            .handle(report(reporter.id, Uuid::new_v4()), &test_ctx.ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
