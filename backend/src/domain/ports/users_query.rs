//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user. An empty store yields an empty list.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
