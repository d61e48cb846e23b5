pub mod document;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use document::{Collection, Document, Owned};
