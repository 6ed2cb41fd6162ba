//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from the user driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::domain::UserDirectoryService;
    /// use users_api::inbound::http::state::HttpState;
    /// # use async_trait::async_trait;
    /// # use users_api::domain::{NewUser, User};
    /// # use users_api::domain::ports::{UserPersistenceError, UserRepository};
    /// # struct Empty;
    /// # #[async_trait]
    /// # impl UserRepository for Empty {
    /// #     async fn list(&self) -> Result<Vec<User>, UserPersistenceError> { Ok(Vec::new()) }
    /// #     async fn insert(&self, _: &NewUser) -> Result<User, UserPersistenceError> {
    /// #         Err(UserPersistenceError::connection("offline"))
    /// #     }
    /// # }
    ///
    /// let service = Arc::new(UserDirectoryService::new(Arc::new(Empty)));
    /// let state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }
}
