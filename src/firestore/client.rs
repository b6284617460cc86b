//! REST client for Cloud Firestore and its local emulator

use super::document::{describe_error_body, parse_created_id, DocumentBody, DocumentId};
use super::endpoint::Endpoint;
use super::error::PersistenceError;
use super::traits::DocumentStore;
use crate::state::FormRecord;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

/// Header carrying the Firebase app id on hosted requests
const APP_ID_HEADER: &str = "X-Firebase-GMPID";

/// Client bound to one endpoint for its whole lifetime
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    endpoint: Endpoint,
}

impl FirestoreClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Create-document request for `collection`
    fn create_request(&self, collection: &str, record: &FormRecord) -> RequestBuilder {
        let url = self.endpoint.collection_url(collection);
        let body = DocumentBody::from_record(record);

        let request = self.client.post(url).json(&body);
        match self.endpoint.app_id() {
            Some(app_id) => request.header(APP_ID_HEADER, app_id),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn create_document(
        &self,
        collection: &str,
        record: &FormRecord,
    ) -> Result<DocumentId, PersistenceError> {
        tracing::debug!(collection, endpoint = %self.endpoint, "Creating document");
        let response = self
            .create_request(collection, record)
            .send()
            .await
            .map_err(PersistenceError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(PersistenceError::transport)?;

        if !status.is_success() {
            return Err(PersistenceError::rejected(
                status.as_u16(),
                describe_error_body(&text),
            ));
        }

        parse_created_id(&text)
    }
}
