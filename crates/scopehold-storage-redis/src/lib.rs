//! Redis adapter for the scopehold store boundary.
//!
//! Each [`ProjectStore`] primitive maps to exactly one Redis command against
//! the set keyed by the project name: `SADD`, `SMEMBERS`, `SCARD`, `EXISTS`,
//! `DEL`, `SREM`. Failures are surfaced, never retried.
//!
//! ```no_run
//! use scopehold_core::ProjectStore;
//! use scopehold_storage_redis::RedisStore;
//!
//! # async fn demo() -> scopehold_core::Result<()> {
//! let store = RedisStore::open(RedisStore::DEFAULT_URL)?;
//! let count = store.count_domains("acme").await?;
//! println!("{count} domains");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tokio::sync::OnceCell;

use scopehold_core::{Domain, ProjectStore, Result, ScopeholdError};

fn store_err(op: &str, e: redis::RedisError) -> ScopeholdError {
    ScopeholdError::Store(format!("{op}: {e}"))
}

/// Redis-backed [`ProjectStore`]. Opening only parses the URL; the TCP
/// connection is established on first use and shared for the rest of the
/// invocation.
pub struct RedisStore {
    client: redis::Client,
    conn: OnceCell<MultiplexedConnection>,
}

impl RedisStore {
    /// The fixed connection target of the CLI: local Redis, default port,
    /// database 0.
    pub const DEFAULT_URL: &'static str = "redis://localhost:6379/0";

    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| store_err("open", e))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                tracing::debug!("connecting to redis store");
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|e| store_err("connect", e))
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl ProjectStore for RedisStore {
    async fn add_domain(&self, project: &str, domain: &Domain) -> Result<bool> {
        let mut conn = self.connection().await?;
        let added: i64 = conn
            .sadd(project, domain.as_str())
            .await
            .map_err(|e| store_err("SADD", e))?;
        Ok(added > 0)
    }

    async fn domains(&self, project: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        conn.smembers(project)
            .await
            .map_err(|e| store_err("SMEMBERS", e))
    }

    async fn count_domains(&self, project: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        conn.scard(project).await.map_err(|e| store_err("SCARD", e))
    }

    async fn project_exists(&self, project: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        conn.exists(project)
            .await
            .map_err(|e| store_err("EXISTS", e))
    }

    async fn delete_project(&self, project: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let removed: i64 = conn.del(project).await.map_err(|e| store_err("DEL", e))?;
        Ok(removed > 0)
    }

    async fn remove_domain(&self, project: &str, domain: &Domain) -> Result<bool> {
        let mut conn = self.connection().await?;
        let removed: i64 = conn
            .srem(project, domain.as_str())
            .await
            .map_err(|e| store_err("SREM", e))?;
        Ok(removed > 0)
    }
}
