//! Connection pooling for the user store.
//!
//! [`DbPool`] keeps a bb8 pool of `diesel-async` PostgreSQL connections.
//! Connection attempts are never retried: when the store refuses a
//! connection the waiting checkout fails with [`PoolError::Checkout`] straight
//! away, and [`PoolConfig::connection_timeout`] only bounds a connect that
//! hangs.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::debug;

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be handed out.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not open its initial connections.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Construct a [`PoolError::Checkout`].
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Construct a [`PoolError::Build`].
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Sizing and timeout settings for [`DbPool`].
///
/// Defaults: at most 10 connections, no idle floor, 30 s connect bound.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use users_api::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://postgres@localhost:5432/users")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// assert_eq!(config.connection_timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration for `database_url` with default sizing.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: None,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Cap the number of open connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Keep at least `min_idle` connections open. Only [`DbPool::new`]
    /// honours this; lazy pools start empty.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Bound how long a single connect attempt may take.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Connection string handed to the driver.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of pooled connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Upper bound on a connect attempt.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    fn manager(&self) -> AsyncDieselConnectionManager<AsyncPgConnection> {
        AsyncDieselConnectionManager::<AsyncPgConnection>::new(&self.database_url)
    }
}

/// Shared handle to the user store connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool and open its `min_idle` connections before returning.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when those connections cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .retry_connection(false)
            .build(config.manager())
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Build a pool that opens no connection until the first checkout, so
    /// the service can start while the store is down.
    pub fn connect_lazily(config: &PoolConfig) -> Self {
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(None)
            .connection_timeout(config.connection_timeout)
            .retry_connection(false)
            .build_unchecked(config.manager());
        Self { inner }
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when the store refuses the connection
    /// or the connect attempt exceeds the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| {
            debug!(error = %err, "connection checkout failed");
            PoolError::checkout(err.to_string())
        })
    }
}
