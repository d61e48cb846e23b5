use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use spotter_core::DomainError;

/// Named collection a document lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Users,
    Workouts,
    ReceivedWorkouts,
    Exercises,
    Complaints,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Workouts,
        Collection::ReceivedWorkouts,
        Collection::Exercises,
        Collection::Complaints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Workouts => "workouts",
            Collection::ReceivedWorkouts => "received_workouts",
            Collection::Exercises => "exercises",
            Collection::Complaints => "complaints",
        }
    }
}

/// An entity snapshot persisted as a single JSON document.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> Uuid;

    /// The error to raise when a document with `id` is missing.
    fn not_found(id: Uuid) -> DomainError;
}

/// A document that belongs to exactly one user.
pub trait Owned: Document {
    /// Human readable name used in ownership errors.
    const RESOURCE: &'static str;

    fn owner_id(&self) -> Uuid;
}
