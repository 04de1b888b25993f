use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};

use crate::config::Config;

/// Abstraction over the counter's backing key-value store
///
/// Increment and decrement must be atomic on the store side (never
/// read-modify-write in this service), so concurrent requests cannot
/// lose updates. Implementations are injected into the application
/// state, which allows tests to substitute an in-memory fake.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment the key by 1, returning the new value.
    /// A missing key is treated as 0 before the increment.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Atomically decrement the key by 1, returning the new value.
    /// No floor: the value may go negative.
    async fn decr(&self, key: &str) -> Result<i64>;

    /// Read the current value. Absent or unparseable values read as 0.
    async fn get(&self, key: &str) -> Result<i64>;

    /// Verify that the store is reachable and responsive.
    async fn ping(&self) -> Result<()>;
}

/// Shareable Redis-backed store for use across async handlers
///
/// Wraps a `ConnectionManager`, which multiplexes a single connection
/// and is cheap to clone, so one instance is reused for all requests.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis using the configured URL
    ///
    /// Fails fast at startup if the server is unreachable; once
    /// connected, the manager transparently reconnects on errors.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())
            .context("Invalid Redis URL")?;

        tracing::info!("Connecting to Redis at: {}", config.redis_url);

        // A single retry: the service fails fast when the server is
        // down instead of sitting in the manager's backoff loop, and
        // failed commands surface their error rather than retrying.
        let manager_config = ConnectionManagerConfig::new().set_number_of_retries(1);

        let conn = ConnectionManager::new_with_config(client, manager_config)
            .await
            .context("Failed to connect to Redis")?;

        tracing::info!("Successfully connected to Redis");

        Ok(Self { conn })
    }
}

/// Interpret a raw stored value as a counter reading
///
/// A missing key or a value that isn't an integer both read as 0.
fn parse_count(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn
            .incr(key, 1)
            .await
            .context("Failed to INCR counter key")?;

        tracing::debug!("Incremented '{}' to {}", key, value);
        Ok(value)
    }

    async fn decr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn
            .decr(key, 1)
            .await
            .context("Failed to DECR counter key")?;

        tracing::debug!("Decremented '{}' to {}", key, value);
        Ok(value)
    }

    async fn get(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(key)
            .await
            .context("Failed to GET counter key")?;

        let value = parse_count(raw);

        tracing::debug!("Read '{}' as {}", key, value);
        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to PING Redis")?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Unexpected PING reply: {}", pong))
        }
    }
}

/// In-memory fake store for tests
///
/// Implements the same increment/decrement/get contract as Redis on a
/// mutex-guarded map, so handler tests run without a live server.
#[cfg(test)]
pub struct MemoryStore {
    values: std::sync::Mutex<std::collections::HashMap<String, i64>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    pub fn with_value(key: &str, value: i64) -> Self {
        let store = Self::new();
        store.values.lock().unwrap().insert(key.to_string(), value);
        store
    }
}

#[cfg(test)]
#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut values = self.values.lock().unwrap();
        let entry = values.entry(key.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }

    async fn decr(&self, key: &str) -> Result<i64> {
        let mut values = self.values.lock().unwrap();
        let entry = values.entry(key.to_string()).or_insert(0);
        *entry -= 1;
        Ok(*entry)
    }

    async fn get(&self, key: &str) -> Result<i64> {
        let values = self.values.lock().unwrap();
        Ok(values.get(key).copied().unwrap_or(0))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Store whose every operation fails, for exercising the 5xx path
#[cfg(test)]
pub struct UnavailableStore;

#[cfg(test)]
#[async_trait]
impl CounterStore for UnavailableStore {
    async fn incr(&self, _key: &str) -> Result<i64> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn decr(&self, _key: &str) -> Result<i64> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn get(&self, _key: &str) -> Result<i64> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
}
