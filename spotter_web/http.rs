use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

use spotter_app::cqrs::Dispatcher;
use spotter_core::{ApplicationError, Result};

use crate::handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> AppState {
        AppState { dispatcher }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let config = state.dispatcher.context().config.clone();

        let router = Router::new()
            // Users
            .route("/users", post(create_user))
            .route("/users/me", get(get_user).delete(delete_user))
            .route("/users/me/username", put(update_username))
            .route("/users/me/icon", put(update_user_icon))
            .route("/users/me/preferences", put(update_preferences))
            .route("/users/me/settings", patch(update_settings))
            .route(
                "/users/me/notification-tokens",
                post(register_notification_token),
            )
            .route(
                "/users/me/notification-tokens/{token}",
                delete(remove_notification_token),
            )
            // Friends
            .route("/friends", get(get_friends))
            .route("/friends/requests", post(send_friend_request))
            .route(
                "/friends/requests/{requester_id}/accept",
                post(accept_friend_request),
            )
            .route(
                "/friends/requests/{requester_id}/decline",
                post(decline_friend_request),
            )
            .route("/friends/{friend_id}", delete(remove_friend))
            // Complaints
            .route("/complaints", post(report_user))
            .route("/complaints/{complaint_id}", delete(withdraw_complaint))
            // Exercises
            .route("/exercises", get(list_exercises).post(add_exercise))
            .route(
                "/exercises/{exercise_id}",
                put(update_exercise).delete(delete_exercise),
            )
            // Workouts
            .route("/workouts", get(list_workouts).post(create_workout))
            .route(
                "/workouts/{workout_id}",
                get(get_workout).put(update_workout).delete(delete_workout),
            )
            .route("/workouts/{workout_id}/share", post(share_workout))
            // Sharing
            .route("/received-workouts", get(list_received_workouts))
            .route(
                "/received-workouts/{id}/accept",
                post(accept_received_workout),
            )
            .route(
                "/received-workouts/{id}/decline",
                post(decline_received_workout),
            )
            .route("/shared-workouts/{id}/decline", post(decline_shared_workout))
            .with_state(state);

        // Uploaded icons are served locally only when their URLs are relative.
        let mount = config.image_base_url.trim_end_matches('/');
        let router = if mount.starts_with('/') && mount.len() > 1 {
            router.nest_service(mount, ServeDir::new(&config.image_dir))
        } else {
            router
        };

        router.layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
