use serde::Serialize;
use uuid::Uuid;

use spotter_core::ApplicationError;
use spotter_domain::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    FriendRequest,
    WorkoutShared,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    /// The user who triggered the notification.
    pub from_user_id: Uuid,
}

impl Notification {
    pub fn friend_request(from: &User) -> Self {
        Self {
            kind: NotificationKind::FriendRequest,
            title: "New friend request".to_string(),
            body: format!("{} wants to be your friend", from.username),
            from_user_id: from.id,
        }
    }

    pub fn workout_shared(from: &User, workout_name: &str) -> Self {
        Self {
            kind: NotificationKind::WorkoutShared,
            title: "New workout".to_string(),
            body: format!("{} shared \"{}\" with you", from.username, workout_name),
            from_user_id: from.id,
        }
    }
}

/// Push notification delivery.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, tokens: &[String], notification: &Notification) -> Result<(), ApplicationError>;
}

/// Notifier that only writes to the log. Used when no push gateway is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, tokens: &[String], notification: &Notification) -> Result<(), ApplicationError> {
        tracing::info!(
            kind = ?notification.kind,
            devices = tokens.len(),
            "push notification: {}",
            notification.body
        );
        Ok(())
    }
}

/// Sends `notification` to `recipient` after the triggering write has been
/// persisted. Failures are logged and swallowed: the write stays.
pub async fn notify_best_effort(notifier: &dyn Notifier, recipient: &User, notification: Notification) {
    let tokens = recipient.push_targets();
    if tokens.is_empty() {
        return;
    }

    if let Err(e) = notifier.notify(tokens, &notification).await {
        tracing::warn!(
            user_id = %recipient.id,
            kind = ?notification.kind,
            "Push notification failed: {e}"
        );
    }
}
