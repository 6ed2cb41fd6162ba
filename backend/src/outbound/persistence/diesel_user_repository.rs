//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Identifiers come from the `users.id` serial column; inserts use
//! `RETURNING` so the assigned identifier is read back in the same statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User};

use super::diesel_basic_error_mapping::{
    ErrorConstructors, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message: String| UserPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        ErrorConstructors {
            connection: |message: String| UserPersistenceError::connection(message),
            constraint: |message: String| UserPersistenceError::constraint(message),
            query: |message: String| UserPersistenceError::query(message),
        },
    )
}

/// Convert a row into a domain user.
///
/// Rows that violate domain invariants (for example a blank name written by
/// another client) are reported as query errors rather than silently dropped.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow { id, name, email } = row;
    User::try_from_parts(id, name, email).map_err(|err| {
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(count = rows.len(), "loaded user rows");
        rows.into_iter().map(row_to_user).collect()
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            name: new_user.name().as_ref(),
            email: new_user.email().as_ref(),
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(user_id = stored.id, "inserted user row");
        row_to_user(stored)
    }
}
