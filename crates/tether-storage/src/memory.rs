use async_trait::async_trait;
use dashmap::DashMap;
use tether_core::store::{KvStore, Result};

/// In-memory implementation of [`KvStore`] backed by a `DashMap`.
///
/// `compare_and_swap` holds the entry's shard lock across the compare and
/// the write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.storage.insert(key.to_owned(), value);
        Ok(())
    }

    async fn compare_and_swap(&self, key: &str, expected: &str, new: String) -> Result<bool> {
        let Some(mut current) = self.storage.get_mut(key) else {
            return Ok(false);
        };

        if current.as_str() != expected {
            return Ok(false);
        }

        *current = new;
        Ok(true)
    }
}
