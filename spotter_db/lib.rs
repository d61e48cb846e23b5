mod connection;
mod document_store;

pub use connection::{DbPool, establish_connection_pool, establish_test_connection_pool};
pub use document_store::PostgresDocumentStore;
