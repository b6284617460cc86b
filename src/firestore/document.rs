//! Firestore REST document encoding
//!
//! Firestore wraps every field value in a typed envelope. The form only
//! writes strings, so each value becomes `{"stringValue": "..."}`.

use super::error::PersistenceError;
use crate::state::FormRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier assigned by the store to a newly created document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    pub string_value: String,
}

/// Request body of a create-document call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentBody {
    pub fields: BTreeMap<&'static str, StringValue>,
}

impl DocumentBody {
    pub fn from_record(record: &FormRecord) -> Self {
        let fields = record
            .entries()
            .map(|(key, value)| {
                (
                    key,
                    StringValue {
                        string_value: value.to_string(),
                    },
                )
            })
            .collect();
        Self { fields }
    }
}

/// The part of a created document we read back
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    name: Option<String>,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Extract the generated id from a create-document response body.
///
/// The document name has the form
/// `projects/{p}/databases/(default)/documents/{collection}/{id}`.
pub fn parse_created_id(body: &str) -> Result<DocumentId, PersistenceError> {
    let doc: CreatedDocument = serde_json::from_str(body)
        .map_err(|e| PersistenceError::MalformedResponse(e.to_string()))?;
    let name = doc
        .name
        .ok_or_else(|| PersistenceError::MalformedResponse("missing document name".into()))?;

    match name.rsplit_once('/') {
        Some((_, id)) if !id.is_empty() => Ok(DocumentId::new(id)),
        _ => Err(PersistenceError::MalformedResponse(format!(
            "document name without id: {name}"
        ))),
    }
}

/// Best-effort description of an error response body
pub fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.status.is_empty() => {
            format!("{}: {}", envelope.error.status, envelope.error.message)
        }
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
