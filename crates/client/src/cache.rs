//! In-memory cache of GraphQL `data` payloads.
//!
//! Keyed by operation document + variables, storing the raw payload a
//! successful round trip produced. Semantics are read/write-through
//! only: no eviction, no TTL, no invalidation. The cache is an explicit
//! instance handed to the gateway at construction, never module-level
//! state, so every test run can start from a fresh one.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// Identity of one operation: the document plus its variables.
///
/// Variables are keyed by their rendered JSON text. serde_json maps are
/// sorted by key (the `preserve_order` feature is off), so the same
/// variables always render to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    document: String,
    variables: String,
}

impl CacheKey {
    pub fn new(document: &str, variables: &serde_json::Value) -> Self {
        Self {
            document: document.to_string(),
            variables: variables.to_string(),
        }
    }
}

/// Shared in-memory store of `data` payloads.
#[derive(Debug, Default)]
pub struct OperationCache {
    entries: RwLock<HashMap<CacheKey, serde_json::Value>>,
}

impl OperationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored payload for an operation.
    pub async fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store (or replace) the payload for an operation.
    pub async fn put(&self, key: CacheKey, data: serde_json::Value) {
        self.entries.write().await.insert(key, data);
    }

    /// Number of cached operations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let cache = OperationCache::new();
        let key = CacheKey::new("{ jobs { id } }", &serde_json::json!({}));

        assert_eq!(cache.get(&key).await, None);

        cache.put(key.clone(), serde_json::json!({ "jobs": [] })).await;
        assert_eq!(cache.get(&key).await, Some(serde_json::json!({ "jobs": [] })));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn same_document_different_variables_are_distinct() {
        let cache = OperationCache::new();
        let doc = "query Job($id: ID!) { job(id: $id) { id } }";
        let key_a = CacheKey::new(doc, &serde_json::json!({ "id": "1" }));
        let key_b = CacheKey::new(doc, &serde_json::json!({ "id": "2" }));

        cache.put(key_a.clone(), serde_json::json!({ "job": { "id": "1" } })).await;

        assert!(cache.get(&key_a).await.is_some());
        assert_eq!(cache.get(&key_b).await, None);
    }

    #[tokio::test]
    async fn put_replaces_existing_payload() {
        let cache = OperationCache::new();
        let key = CacheKey::new("{ jobs { id } }", &serde_json::json!({}));

        cache.put(key.clone(), serde_json::json!({ "jobs": [1] })).await;
        cache.put(key.clone(), serde_json::json!({ "jobs": [1, 2] })).await;

        assert_eq!(cache.get(&key).await, Some(serde_json::json!({ "jobs": [1, 2] })));
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn key_text_is_stable_across_key_order() {
        // Maps render sorted, so building the same variables in a
        // different order must produce the same key.
        let mut reversed = serde_json::Map::new();
        reversed.insert("b".into(), serde_json::json!(2));
        reversed.insert("a".into(), serde_json::json!(1));

        let key_a = CacheKey::new("q", &serde_json::json!({ "a": 1, "b": 2 }));
        let key_b = CacheKey::new("q", &serde_json::Value::Object(reversed));
        assert_eq!(key_a, key_b);
    }
}
