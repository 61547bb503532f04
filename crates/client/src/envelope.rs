//! Wire shapes for one GraphQL round trip.
//!
//! A request is always `{ "query": ..., "variables": ... }`; operations
//! without variables send an empty object rather than omitting the
//! field. The response either carries a `data` tree matching the
//! requested selection or an `errors` array of messages.

use serde::{Deserialize, Serialize};

/// Body of a GraphQL POST: the operation document plus its variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    /// Build an envelope for a document with variables.
    pub fn new(query: impl Into<String>, variables: serde_json::Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Build an envelope for a document that takes no variables.
    ///
    /// Sends `"variables": {}`, matching what the server expects for a
    /// parameterless operation.
    pub fn bare(query: impl Into<String>) -> Self {
        Self::new(query, serde_json::Value::Object(Default::default()))
    }
}

/// Body of a GraphQL response.
///
/// Servers may return `data`, `errors`, or both; a missing or `null`
/// `data` deserializes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

/// One entry of the response `errors` array.
///
/// Servers attach more fields (`locations`, `path`, `extensions`); only
/// the message is consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl GraphqlResponse {
    /// All error messages joined by newlines, in array order.
    ///
    /// Returns `None` when there is no `errors` array or it is empty,
    /// so an empty array does not count as a failure.
    pub fn combined_errors(&self) -> Option<String> {
        let errors = self.errors.as_deref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
