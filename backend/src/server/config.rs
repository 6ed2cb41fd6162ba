//! HTTP server configuration object.

use std::net::SocketAddr;

use users_api::outbound::persistence::DbPool;

/// Inputs required to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` and backed by
    /// `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
