use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Document {collection}/{id} could not be decoded: {source}")]
    Decode {
        collection: &'static str,
        id: Uuid,
        source: serde_json::Error,
    },
}
