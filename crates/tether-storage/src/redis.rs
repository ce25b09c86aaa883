use async_trait::async_trait;
use redis::AsyncCommands;
use tether_core::store::{KvStore, Result};
use tether_core::StorageError;
use tracing::{debug, trace, warn};

pub const DEFAULT_KEY_PREFIX: &str = "tether:link:";

/// Sets `KEYS[1]` to `ARGV[2]` only when it currently holds `ARGV[1]`.
const COMPARE_AND_SWAP_SCRIPT: &str = r#"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    redis.call('SET', KEYS[1], ARGV[2])
    return 1
end
return 0
"#;

/// A Redis-backed implementation of [`KvStore`].
///
/// Values are stored as plain strings under a configurable key prefix.
/// Conditional writes run as a Lua script, which Redis executes atomically.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StorageError::Timeout(message)
    } else if err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a new Redis store using [`DEFAULT_KEY_PREFIX`].
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a new Redis store with a custom key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Prefix prepended to every short code (e.g., "myapp:link:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a client for `redis_url` and connects with a multiplexed connection.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| StorageError::Unavailable(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::with_prefix(conn, key_prefix))
    }

    fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let storage_key = self.storage_key(key);
        trace!(key, "Fetching value from Redis");

        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(&storage_key)
            .await
            .map_err(|e| {
                warn!(key, error = %e, "Redis error on get");
                map_redis_error("failed to fetch value from Redis", e)
            })
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let storage_key = self.storage_key(key);
        trace!(key, "Writing value to Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&storage_key, value).await {
            Ok(()) => {
                debug!(key, "Stored value in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(key, error = %e, "Redis error on set");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn compare_and_swap(&self, key: &str, expected: &str, new: String) -> Result<bool> {
        let storage_key = self.storage_key(key);
        trace!(key, "Compare-and-swap in Redis");

        let mut conn = self.conn.clone();
        let swapped: i64 = redis::Script::new(COMPARE_AND_SWAP_SCRIPT)
            .key(&storage_key)
            .arg(expected)
            .arg(new)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(key, error = %e, "Redis error on compare-and-swap");
                map_redis_error("failed to compare-and-swap value in Redis", e)
            })?;

        Ok(swapped == 1)
    }
}
