use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use spotter_app::cqrs::commands::{ReportUser, WithdrawComplaint};
use spotter_domain::models::complaint::ComplaintReason;

use crate::{
    handlers::{ApiResult, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ReportUserBody {
    pub reported_user_id: Uuid,
    pub reason: ComplaintReason,
    pub description: Option<String>,
}

/// POST /complaints
pub async fn report_user(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<ReportUserBody>,
) -> ApiResult<impl IntoResponse> {
    let complaint = state
        .dispatcher
        .dispatch(ReportUser {
            user_id,
            reported_user_id: body.reported_user_id,
            reason: body.reason,
            description: body.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}

/// DELETE /complaints/{complaint_id}
pub async fn withdraw_complaint(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(complaint_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(WithdrawComplaint {
            user_id,
            complaint_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
