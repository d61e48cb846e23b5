use serde_json::Value;
use uuid::Uuid;

use spotter_core::ApplicationError;
use spotter_domain::Collection;

use crate::repository::WriteBatch;

/// Raw document persistence, keyed by (collection, id).
/// Implementations must be safe to share between concurrent requests.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns `None` when the document does not exist.
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, ApplicationError>;

    /// Inserts or replaces a document.
    async fn put(&self, collection: Collection, id: Uuid, data: Value) -> Result<(), ApplicationError>;

    /// All documents of `collection` whose top-level `field` equals `value`.
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, ApplicationError>;

    /// Applies every put and delete of the batch.
    async fn batch_write(&self, batch: WriteBatch) -> Result<(), ApplicationError>;
}
