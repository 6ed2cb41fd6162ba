//! Driven port for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached or dropped the connection.
        Connection => "user repository connection failed: {message}",
        /// The store rejected a write because of a schema constraint.
        Constraint => "user repository constraint violated: {message}",
        /// Any other failure while executing a statement.
        Query => "user repository query failed: {message}",
    }
}

/// Storage of [`User`] records.
///
/// Identifiers are assigned by the store; implementations must return the
/// persisted record including its new identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in store-native order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Persist a new user and return it with its assigned identifier.
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError>;
}
