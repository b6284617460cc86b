//! Trait abstraction for the document store to enable mocking in tests

use super::document::DocumentId;
use super::error::PersistenceError;
use crate::state::FormRecord;
use async_trait::async_trait;

/// Write side of a document database
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a new document with a store-assigned id
    async fn create_document(
        &self,
        collection: &str,
        record: &FormRecord,
    ) -> Result<DocumentId, PersistenceError>;
}
