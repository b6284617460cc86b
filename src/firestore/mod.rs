//! Firestore access over its REST API

mod client;
mod document;
mod endpoint;
mod error;
mod gateway;
mod traits;

pub use document::DocumentId;
pub use endpoint::Endpoint;
pub use error::PersistenceError;
pub use gateway::PersistenceGateway;

#[cfg(test)]
pub use traits::MockDocumentStore;
