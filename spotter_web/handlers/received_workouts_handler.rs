use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use spotter_app::{
    cqrs::commands::{
        AcceptReceivedWorkout, DeclineReceivedWorkout, DeclineSharedWorkout,
        ListReceivedWorkouts,
    },
    dto::{ReceivedWorkoutResponse, WorkoutResponse},
};

use crate::{
    handlers::{ApiResult, ChangedResponse, CurrentUser},
    http::AppState,
};

/// GET /received-workouts
pub async fn list_received_workouts(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<ReceivedWorkoutResponse>>> {
    let received = state
        .dispatcher
        .dispatch(ListReceivedWorkouts { user_id })
        .await?;
    Ok(Json(received))
}

/// POST /received-workouts/{id}/accept – Copies the workout into the
/// caller's own list.
pub async fn accept_received_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(received_workout_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = state
        .dispatcher
        .dispatch(AcceptReceivedWorkout {
            user_id,
            received_workout_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// POST /received-workouts/{id}/decline
pub async fn decline_received_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(received_workout_id): Path<Uuid>,
) -> ApiResult<Json<ChangedResponse>> {
    let changed = state
        .dispatcher
        .dispatch(DeclineReceivedWorkout {
            user_id,
            received_workout_id,
        })
        .await?;
    Ok(Json(ChangedResponse { changed }))
}

/// POST /shared-workouts/{id}/decline
pub async fn decline_shared_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(shared_workout_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(DeclineSharedWorkout {
            user_id,
            shared_workout_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
