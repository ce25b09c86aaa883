use crate::error::StorageError;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A durable key-value store reachable only by key lookup.
///
/// Values are opaque strings. Single-key `get` and `put` are atomic;
/// there are no transactions, listings or TTLs.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: String) -> Result<()>;

    /// Replaces the value under `key` with `new` only if it currently equals `expected`.
    ///
    /// Returns `true` if the swap happened. A missing key never matches.
    /// Stores without a conditional write keep the default, which fails
    /// with [`StorageError::Unsupported`].
    async fn compare_and_swap(&self, key: &str, expected: &str, new: String) -> Result<bool> {
        let _ = (expected, new);
        Err(StorageError::Unsupported(format!(
            "compare-and-swap on key '{key}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct PlainStore {
        items: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KvStore for PlainStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.lock().await.get(key).cloned())
        }

        async fn put(&self, key: &str, value: String) -> Result<()> {
            self.items.lock().await.insert(key.to_string(), value);
            Ok(())
        }
    }

    #[tokio::test]
    async fn compare_and_swap_is_unsupported_by_default() {
        let store = PlainStore::default();
        store.put("abc", "1".to_string()).await.unwrap();

        let err = store
            .compare_and_swap("abc", "1", "2".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unsupported(_)));
        assert_eq!(store.get("abc").await.unwrap().as_deref(), Some("1"));
    }
}
