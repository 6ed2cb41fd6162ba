//! Domain service backing the user driving ports.
//!
//! The service owns request validation and the translation of persistence
//! failures into client-visible error kinds, so the HTTP adapter only maps
//! [`ErrorCode`](crate::domain::ErrorCode) values to status codes.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    CreateUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, NewUser, User, UserValidationError};

/// Implements [`UsersQuery`] and [`UsersCommand`] over a [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Create a service that reads and writes through `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_validation_error(err: &UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user store unavailable");
            Error::store_unavailable("user store is unavailable")
        }
        UserPersistenceError::Constraint { message } => {
            warn!(%message, "user store rejected write");
            Error::constraint_violation("user store rejected the write")
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user store query failed");
            Error::internal(message)
        }
    }
}

fn validate(request: CreateUserRequest) -> Result<NewUser, UserValidationError> {
    let CreateUserRequest { name, email } = request;
    NewUser::try_from_strings(name.unwrap_or_default(), email.unwrap_or_default())
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self.repository.list().await.map_err(map_persistence_error)?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }
}

#[async_trait]
impl UsersCommand for UserDirectoryService {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let new_user = validate(request).map_err(|err| {
            debug!(field = err.field(), "rejected user payload");
            map_validation_error(&err)
        })?;
        let user = self
            .repository
            .insert(&new_user)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %user.id(), "created user");
        Ok(user)
    }
}
