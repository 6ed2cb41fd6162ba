//! Driving port for creating users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Unvalidated input for [`UsersCommand::create_user`].
///
/// Absent fields are represented as `None` so validation can report them the
/// same way as blank ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Requested user name.
    pub name: Option<String>,
    /// Requested contact email.
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Build a request with both fields present.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Domain use-case port for creating users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate the request, persist the user, and return the stored record.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;
}
