use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use spotter_app::{
    cqrs::commands::{AddExercise, DeleteExercise, ListExercises, UpdateExercise},
    dto::ExerciseResponse,
};

use crate::{
    handlers::{ApiResult, CurrentUser},
    http::AppState,
};

/// Used for both create and update.
#[derive(Debug, Deserialize)]
pub struct ExerciseBody {
    pub name: String,
    pub muscle_group: Option<String>,
    pub notes: Option<String>,
}

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let exercises = state.dispatcher.dispatch(ListExercises { user_id }).await?;
    Ok(Json(exercises))
}

/// POST /exercises
pub async fn add_exercise(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<ExerciseBody>,
) -> ApiResult<impl IntoResponse> {
    let exercise = state
        .dispatcher
        .dispatch(AddExercise {
            user_id,
            name: body.name,
            muscle_group: body.muscle_group,
            notes: body.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// PUT /exercises/{exercise_id}
pub async fn update_exercise(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(exercise_id): Path<Uuid>,
    Json(body): Json<ExerciseBody>,
) -> ApiResult<Json<ExerciseResponse>> {
    let exercise = state
        .dispatcher
        .dispatch(UpdateExercise {
            user_id,
            exercise_id,
            name: body.name,
            muscle_group: body.muscle_group,
            notes: body.notes,
        })
        .await?;
    Ok(Json(exercise))
}

/// DELETE /exercises/{exercise_id}
pub async fn delete_exercise(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(exercise_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(DeleteExercise {
            user_id,
            exercise_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
