use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::DomainError;

use crate::document::{Collection, Document, Owned};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintReason {
    Spam,
    Harassment,
    InappropriateContent,
    Other,
}

/// A report filed by one user against another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub reported_user_id: Uuid,
    pub reason: ComplaintReason,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    pub fn new(
        reporter_id: Uuid,
        reported_user_id: Uuid,
        reason: ComplaintReason,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reporter_id,
            reported_user_id,
            reason,
            description,
            created_at: now,
        }
    }
}

impl Document for Complaint {
    const COLLECTION: Collection = Collection::Complaints;

    fn id(&self) -> Uuid {
        self.id
    }

    fn not_found(id: Uuid) -> DomainError {
        DomainError::ComplaintNotFound(id)
    }
}

impl Owned for Complaint {
    const RESOURCE: &'static str = "complaint";

    fn owner_id(&self) -> Uuid {
        self.reporter_id
    }
}
