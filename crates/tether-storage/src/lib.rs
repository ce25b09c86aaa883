//! Backing key-value stores for link records.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use self::redis::RedisStore;
pub use tether_core::store::{KvStore, Result};
pub use tether_core::StorageError;
