use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::DomainError;

use crate::document::{Collection, Document, Owned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub muscle_group: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exercise {
    pub fn new(
        owner_id: Uuid,
        name: String,
        muscle_group: Option<String>,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.trim().to_string(),
            muscle_group,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Names are compared trimmed and case-insensitively.
    pub fn has_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }

    pub fn update(
        &mut self,
        name: String,
        muscle_group: Option<String>,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.name = name.trim().to_string();
        self.muscle_group = muscle_group;
        self.notes = notes;
        self.updated_at = now;
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Document for Exercise {
    const COLLECTION: Collection = Collection::Exercises;

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::ExerciseNotFound(id)
    }
}

impl Owned for Exercise {
    const RESOURCE: &'static str = "exercise";

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}
