use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use spotter_app::{
    cqrs::commands::{
        AcceptFriendRequest, DeclineFriendRequest, GetFriends, RemoveFriend, SendFriendRequest,
    },
    dto::FriendResponse,
};

use crate::{
    handlers::{ApiResult, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FriendRequestBody {
    pub recipient_id: Uuid,
}

/// GET /friends
pub async fn get_friends(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<Vec<FriendResponse>>> {
    let friends = state.dispatcher.dispatch(GetFriends { user_id }).await?;
    Ok(Json(friends))
}

/// POST /friends/requests
pub async fn send_friend_request(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<FriendRequestBody>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(SendFriendRequest {
            user_id,
            recipient_id: body.recipient_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /friends/requests/{requester_id}/accept
pub async fn accept_friend_request(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(requester_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(AcceptFriendRequest {
            user_id,
            requester_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /friends/requests/{requester_id}/decline
pub async fn decline_friend_request(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(requester_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(DeclineFriendRequest {
            user_id,
            requester_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /friends/{friend_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(friend_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .dispatcher
        .dispatch(RemoveFriend { user_id, friend_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
