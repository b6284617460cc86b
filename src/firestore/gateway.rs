//! Persistence gateway: the single write path of the application

use super::client::FirestoreClient;
use super::document::DocumentId;
use super::endpoint::Endpoint;
use super::error::PersistenceError;
use super::traits::DocumentStore;
use crate::state::FormRecord;
use std::sync::Arc;

/// Collection every submission is written to
pub const COLLECTION: &str = "starStories";

/// Writes records to the endpoint chosen at startup.
///
/// Each call is one independent create with no retry, so submitting the
/// same data twice produces two documents.
#[derive(Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn DocumentStore>,
    endpoint: Endpoint,
}

impl PersistenceGateway {
    /// Gateway backed by Firestore at `endpoint`
    pub fn new(endpoint: Endpoint) -> Self {
        let store = Arc::new(FirestoreClient::new(endpoint.clone()));
        Self::with_store(store, endpoint)
    }

    /// Gateway backed by an arbitrary store
    pub fn with_store(store: Arc<dyn DocumentStore>, endpoint: Endpoint) -> Self {
        Self { store, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Store `record` as a new document and return its id
    pub async fn save(&self, record: &FormRecord) -> Result<DocumentId, PersistenceError> {
        match self.store.create_document(COLLECTION, record).await {
            Ok(id) => {
                tracing::info!(document_id = %id, endpoint = %self.endpoint, "Document written");
                Ok(id)
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Error adding document");
                Err(e)
            }
        }
    }
}
