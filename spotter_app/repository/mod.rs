mod document_store;
mod write_batch;

use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use spotter_core::{ApplicationError, DbError};
use spotter_domain::Document;

pub use document_store::DocumentStore;
pub use write_batch::{DocumentKey, DocumentWrite, WriteBatch};

/// Typed access to the document store.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Loads a document, `None` if it does not exist.
    pub async fn get<T: Document>(&self, id: Uuid) -> Result<Option<T>, ApplicationError> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(data) => Ok(Some(decode::<T>(id, data)?)),
            None => Ok(None),
        }
    }

    pub async fn put<T: Document>(&self, document: &T) -> Result<(), ApplicationError> {
        let data = serde_json::to_value(document)?;
        self.store.put(T::COLLECTION, document.id(), data).await
    }

    /// Documents whose `field` holds the given id (owner, recipient, ...).
    pub async fn find_by<T: Document>(&self, field: &str, id: Uuid) -> Result<Vec<T>, ApplicationError> {
        let value = Value::String(id.to_string());
        let documents = self.store.find_by_field(T::COLLECTION, field, &value).await?;

        documents
            .into_iter()
            .map(|data| {
                let id = document_id(&data).unwrap_or_else(Uuid::nil);
                decode::<T>(id, data)
            })
            .collect()
    }

    /// Loads every existing document among `ids`, skipping missing ones.
    pub async fn get_many<T: Document>(&self, ids: &[Uuid]) -> Result<Vec<T>, ApplicationError> {
        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(document) = self.get::<T>(*id).await? {
                documents.push(document);
            }
        }
        Ok(documents)
    }

    /// Empty batches are not sent to the store.
    pub async fn batch_write(&self, batch: WriteBatch) -> Result<(), ApplicationError> {
        if batch.is_empty() {
            return Ok(());
        }
        self.store.batch_write(batch).await
    }
}

fn document_id(data: &Value) -> Option<Uuid> {
    data.get("id")?.as_str()?.parse().ok()
}

fn decode<T: Document>(id: Uuid, data: Value) -> Result<T, ApplicationError> {
    serde_json::from_value(data).map_err(|source| {
        ApplicationError::Db(DbError::Decode {
            collection: T::COLLECTION.as_str(),
            id,
            source,
        })
    })
}
