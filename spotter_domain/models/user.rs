use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::DomainError;

use crate::document::{Collection, Document};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountTier {
    #[default]
    Free,
    Premium,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub weight_unit: WeightUnit,
    pub notifications_enabled: bool,
    pub private_profile: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kilograms,
            notifications_enabled: true,
            private_profile: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub icon_url: Option<String>,
    pub tier: AccountTier,
    pub friends: Vec<Uuid>,
    /// Users who asked to become friends and are waiting for an answer.
    pub incoming_friend_requests: Vec<Uuid>,
    /// IDs of `ReceivedWorkout` documents addressed to this user.
    pub received_workouts: Vec<Uuid>,
    pub preferences: Preferences,
    pub notification_tokens: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, username: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            email,
            icon_url: None,
            tier: AccountTier::Free,
            friends: vec![],
            incoming_friend_requests: vec![],
            received_workouts: vec![],
            preferences: Preferences::default(),
            notification_tokens: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_free_tier(&self) -> bool {
        self.tier == AccountTier::Free
    }

    pub fn is_friend(&self, user_id: Uuid) -> bool {
        self.friends.contains(&user_id)
    }

    pub fn has_friend_request_from(&self, user_id: Uuid) -> bool {
        self.incoming_friend_requests.contains(&user_id)
    }

    pub fn has_received_workout(&self, received_workout_id: Uuid) -> bool {
        self.received_workouts.contains(&received_workout_id)
    }

    pub fn rename(&mut self, username: String, now: DateTime<Utc>) {
        self.username = username;
        self.updated_at = now;
    }

    pub fn set_icon_url(&mut self, icon_url: String, now: DateTime<Utc>) {
        self.icon_url = Some(icon_url);
        self.updated_at = now;
    }

    pub fn set_preferences(&mut self, preferences: Preferences, now: DateTime<Utc>) {
        self.preferences = preferences;
        self.updated_at = now;
    }

    /// Adds a friend, dropping any pending request from them.
    /// Returns `false` if they were already friends.
    pub fn add_friend(&mut self, user_id: Uuid, now: DateTime<Utc>) -> bool {
        self.incoming_friend_requests.retain(|id| *id != user_id);
        if self.is_friend(user_id) {
            return false;
        }
        self.friends.push(user_id);
        self.updated_at = now;
        true
    }

    pub fn remove_friend(&mut self, user_id: Uuid, now: DateTime<Utc>) -> bool {
        let removed = remove_item(&mut self.friends, &user_id);
        if removed {
            self.updated_at = now;
        }
        removed
    }

    pub fn receive_friend_request(&mut self, from: Uuid, now: DateTime<Utc>) -> bool {
        if self.has_friend_request_from(from) {
            return false;
        }
        self.incoming_friend_requests.push(from);
        self.updated_at = now;
        true
    }

    pub fn remove_friend_request(&mut self, from: Uuid, now: DateTime<Utc>) -> bool {
        let removed = remove_item(&mut self.incoming_friend_requests, &from);
        if removed {
            self.updated_at = now;
        }
        removed
    }

    pub fn add_received_workout(&mut self, received_workout_id: Uuid, now: DateTime<Utc>) {
        if !self.has_received_workout(received_workout_id) {
            self.received_workouts.push(received_workout_id);
            self.updated_at = now;
        }
    }

    pub fn remove_received_workout(&mut self, received_workout_id: Uuid, now: DateTime<Utc>) -> bool {
        let removed = remove_item(&mut self.received_workouts, &received_workout_id);
        if removed {
            self.updated_at = now;
        }
        removed
    }

    /// Returns `false` when the token was already registered.
    pub fn add_notification_token(&mut self, token: String, now: DateTime<Utc>) -> bool {
        if self.notification_tokens.contains(&token) {
            return false;
        }
        self.notification_tokens.push(token);
        self.updated_at = now;
        true
    }

    pub fn remove_notification_token(&mut self, token: &str, now: DateTime<Utc>) -> bool {
        let before = self.notification_tokens.len();
        self.notification_tokens.retain(|t| t != token);
        let removed = self.notification_tokens.len() != before;
        if removed {
            self.updated_at = now;
        }
        removed
    }

    /// Tokens to push to, empty when the user opted out of notifications.
    pub fn push_targets(&self) -> &[String] {
        if self.preferences.notifications_enabled {
            &self.notification_tokens
        } else {
            &[]
        }
    }

    /// Forgets every reference to `user_id` (friendship and pending request).
    pub fn forget_user(&mut self, user_id: Uuid, now: DateTime<Utc>) -> bool {
        let unfriended = self.remove_friend(user_id, now);
        let unrequested = self.remove_friend_request(user_id, now);
        unfriended || unrequested
    }
}

impl Document for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::UserNotFound(id)
    }
}

fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|i| i == item) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}
