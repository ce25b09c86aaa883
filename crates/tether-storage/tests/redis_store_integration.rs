use std::sync::Arc;

use redis::AsyncCommands;
use tether_storage::{KvStore, RedisStore};
use tether_test_infra::redis::{RedisConfig, RedisServer};

struct Fixture {
    redis: RedisServer,
    store: RedisStore,
}

impl Fixture {
    async fn start() -> Self {
        let redis = RedisServer::new(RedisConfig::builder().build())
            .await
            .expect("start redis");
        let conn = redis.connection().await.expect("redis connection");

        Self {
            store: RedisStore::new(conn),
            redis,
        }
    }
}

#[tokio::test]
async fn put_and_get_round_trip() {
    let fixture = Fixture::start().await;

    assert!(fixture.store.get("abc123").await.unwrap().is_none());

    fixture
        .store
        .put("abc123", r#"{"version":1}"#.to_string())
        .await
        .unwrap();

    let value = fixture.store.get("abc123").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"{"version":1}"#));
}

#[tokio::test]
async fn keys_are_prefixed() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .put("abc123", "value".to_string())
        .await
        .unwrap();

    let mut conn = fixture.redis.connection().await.unwrap();
    let raw: Option<String> = conn.get("tether:link:abc123").await.unwrap();
    assert_eq!(raw.as_deref(), Some("value"));
}

#[tokio::test]
async fn custom_prefix_isolates_stores() {
    let fixture = Fixture::start().await;
    let conn = fixture.redis.connection().await.unwrap();
    let other = RedisStore::with_prefix(conn, "other:");

    fixture
        .store
        .put("abc123", "value".to_string())
        .await
        .unwrap();

    assert!(other.get("abc123").await.unwrap().is_none());
}

#[tokio::test]
async fn compare_and_swap_only_replaces_expected_value() {
    let fixture = Fixture::start().await;
    fixture.store.put("abc123", "v1".to_string()).await.unwrap();

    assert!(!fixture
        .store
        .compare_and_swap("abc123", "stale", "v2".to_string())
        .await
        .unwrap());
    assert!(fixture
        .store
        .compare_and_swap("abc123", "v1", "v2".to_string())
        .await
        .unwrap());
    assert!(!fixture
        .store
        .compare_and_swap("missing", "v1", "v2".to_string())
        .await
        .unwrap());

    assert_eq!(
        fixture.store.get("abc123").await.unwrap().as_deref(),
        Some("v2")
    );
    assert!(fixture.store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_compare_and_swap_has_single_winner() {
    let fixture = Fixture::start().await;
    fixture.store.put("abc123", "v0".to_string()).await.unwrap();

    let store = Arc::new(fixture.store.clone());
    let mut handles = vec![];
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .compare_and_swap("abc123", "v0", format!("v{}", i + 1))
                .await
                .unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
}

#[tokio::test]
async fn connect_by_url() {
    let fixture = Fixture::start().await;
    let url = fixture.redis.url().await.unwrap();

    let store = RedisStore::connect(&url, "via-url:").await.unwrap();
    store.put("abc123", "value".to_string()).await.unwrap();

    assert_eq!(store.get("abc123").await.unwrap().as_deref(), Some("value"));
}
