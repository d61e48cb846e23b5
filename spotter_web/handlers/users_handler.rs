use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde::Deserialize;

use spotter_app::{
    cqrs::commands::{
        CreateUser, DeleteUser, GetUser, RegisterNotificationToken, RemoveNotificationToken,
        UpdatePreferences, UpdateSettings, UpdateUserIcon, UpdateUsername,
    },
    dto::UserResponse,
};
use spotter_domain::models::user::{Preferences, WeightUnit};

use crate::{
    handlers::{ApiResult, ChangedResponse, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UsernameBody {
    pub username: String,
}

/// Every field is optional; omitted settings are left as they are.
#[derive(Debug, Deserialize)]
pub struct SettingsBody {
    pub weight_unit: Option<WeightUnit>,
    pub notifications_enabled: Option<bool>,
    pub private_profile: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationTokenBody {
    pub token: String,
}

/// POST /users – Create the profile for the authenticated account.
pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CreateUserBody>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .dispatcher
        .dispatch(CreateUser {
            user_id,
            username: body.username,
            email: body.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/me
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.dispatcher.dispatch(GetUser { user_id }).await?;
    Ok(Json(user))
}

/// DELETE /users/me – Remove the account and everything it owns.
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<StatusCode> {
    state.dispatcher.dispatch(DeleteUser { user_id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /users/me/username
pub async fn update_username(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<UsernameBody>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .dispatcher
        .dispatch(UpdateUsername {
            user_id,
            username: body.username,
        })
        .await?;
    Ok(Json(user))
}

/// PUT /users/me/icon – Raw image bytes, typed by the `content-type` header.
pub async fn update_user_icon(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    headers: HeaderMap,
    image: Bytes,
) -> ApiResult<Json<UserResponse>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let user = state
        .dispatcher
        .dispatch(UpdateUserIcon {
            user_id,
            image: image.to_vec(),
            content_type,
        })
        .await?;
    Ok(Json(user))
}

/// PUT /users/me/preferences – Replaces all preferences.
pub async fn update_preferences(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(preferences): Json<Preferences>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .dispatcher
        .dispatch(UpdatePreferences {
            user_id,
            preferences,
        })
        .await?;
    Ok(Json(user))
}

/// PATCH /users/me/settings
pub async fn update_settings(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<SettingsBody>,
) -> ApiResult<Json<ChangedResponse>> {
    let changed = state
        .dispatcher
        .dispatch(UpdateSettings {
            user_id,
            weight_unit: body.weight_unit,
            notifications_enabled: body.notifications_enabled,
            private_profile: body.private_profile,
        })
        .await?;
    Ok(Json(ChangedResponse { changed }))
}

/// POST /users/me/notification-tokens
pub async fn register_notification_token(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<NotificationTokenBody>,
) -> ApiResult<Json<ChangedResponse>> {
    let changed = state
        .dispatcher
        .dispatch(RegisterNotificationToken {
            user_id,
            token: body.token,
        })
        .await?;
    Ok(Json(ChangedResponse { changed }))
}

/// DELETE /users/me/notification-tokens/{token}
pub async fn remove_notification_token(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(token): Path<String>,
) -> ApiResult<Json<ChangedResponse>> {
    let changed = state
        .dispatcher
        .dispatch(RemoveNotificationToken { user_id, token })
        .await?;
    Ok(Json(ChangedResponse { changed }))
}
