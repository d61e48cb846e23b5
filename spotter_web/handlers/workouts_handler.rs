use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_app::{
    cqrs::commands::{
        CreateWorkout, DeleteWorkout, GetWorkout, ListWorkouts, ShareWorkout, UpdateWorkout,
    },
    dto::WorkoutResponse,
};
use spotter_domain::models::workout::WorkoutExercise;

use crate::{
    handlers::{ApiResult, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct WorkoutBody {
    pub name: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Deserialize)]
pub struct ShareWorkoutBody {
    pub recipient_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareWorkoutResponse {
    pub received_workout_ids: Vec<Uuid>,
}

/// GET /workouts
pub async fn list_workouts(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = state.dispatcher.dispatch(ListWorkouts { user_id }).await?;
    Ok(Json(workouts))
}

/// POST /workouts
pub async fn create_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<WorkoutBody>,
) -> ApiResult<impl IntoResponse> {
    let workout = state
        .dispatcher
        .dispatch(CreateWorkout {
            user_id,
            name: body.name,
            notes: body.notes,
            exercises: body.exercises,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /workouts/{workout_id}
pub async fn get_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(workout_id): Path<Uuid>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = state
        .dispatcher
        .dispatch(GetWorkout {
            user_id,
            workout_id,
        })
        .await?;
    Ok(Json(workout))
}

/// PUT /workouts/{workout_id} – Full replacement of name, notes and exercises.
pub async fn update_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(workout_id): Path<Uuid>,
    Json(body): Json<WorkoutBody>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = state
        .dispatcher
        .dispatch(UpdateWorkout {
            user_id,
            workout_id,
            name: body.name,
            notes: body.notes,
            exercises: body.exercises,
        })
        .await?;
    Ok(Json(workout))
}

/// DELETE /workouts/{workout_id}
pub async fn delete_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(workout_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(DeleteWorkout {
            user_id,
            workout_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /workouts/{workout_id}/share
pub async fn share_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(workout_id): Path<Uuid>,
    Json(body): Json<ShareWorkoutBody>,
) -> ApiResult<impl IntoResponse> {
    let received_workout_ids = state
        .dispatcher
        .dispatch(ShareWorkout {
            user_id,
            workout_id,
            recipient_ids: body.recipient_ids,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShareWorkoutResponse {
            received_workout_ids,
        }),
    ))
}
