use serde_json::Value;
use std::collections::BTreeSet;
use uuid::Uuid;

use spotter_core::ApplicationError;
use spotter_domain::{Collection, Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub collection: Collection,
    pub id: Uuid,
}

impl DocumentKey {
    pub fn of<T: Document>(id: Uuid) -> Self {
        Self {
            collection: T::COLLECTION,
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentWrite {
    pub key: DocumentKey,
    pub data: Value,
}

/// Puts and deletes spanning several collections, handed to the store in
/// one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    puts: Vec<DocumentWrite>,
    deletes: Vec<DocumentKey>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<T: Document>(&mut self, document: &T) -> Result<&mut Self, ApplicationError> {
        let data = serde_json::to_value(document)?;
        self.puts.push(DocumentWrite {
            key: DocumentKey::of::<T>(document.id()),
            data,
        });
        Ok(self)
    }

    pub fn delete<T: Document>(&mut self, id: Uuid) -> &mut Self {
        self.deletes.push(DocumentKey::of::<T>(id));
        self
    }

    pub fn puts(&self) -> &[DocumentWrite] {
        &self.puts
    }

    pub fn deletes(&self) -> &[DocumentKey] {
        &self.deletes
    }

    pub fn is_empty(&self) -> bool {
        self.puts.is_empty() && self.deletes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.puts.len() + self.deletes.len()
    }

    /// Collections touched by the batch.
    pub fn collections(&self) -> BTreeSet<Collection> {
        self.puts
            .iter()
            .map(|w| w.key.collection)
            .chain(self.deletes.iter().map(|k| k.collection))
            .collect()
    }

    pub fn is_put<T: Document>(&self, id: Uuid) -> bool {
        let key = DocumentKey::of::<T>(id);
        self.puts.iter().any(|w| w.key == key)
    }

    pub fn is_deleted<T: Document>(&self, id: Uuid) -> bool {
        self.deletes.contains(&DocumentKey::of::<T>(id))
    }

    pub fn into_parts(self) -> (Vec<DocumentWrite>, Vec<DocumentKey>) {
        (self.puts, self.deletes)
    }
}
