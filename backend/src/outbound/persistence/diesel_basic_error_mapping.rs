//! Shared Diesel error mapping for repositories with basic query semantics.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constructors for the three failure classes a repository reports.
pub struct ErrorConstructors<Conn, Constraint, Query> {
    /// Store unreachable or connection dropped.
    pub connection: Conn,
    /// Store-side constraint rejection.
    pub constraint: Constraint,
    /// Any other statement failure.
    pub query: Query,
}

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    debug!(%message, "connection pool failure");
    connection(message)
}

/// Map Diesel error variants into connection, constraint, or query errors.
///
/// Constraint messages carry the store's own text (including the constraint
/// name when the driver reports one) so operators can tell which schema rule
/// rejected the write.
pub fn map_basic_diesel_error<E, Conn, Constraint, Query>(
    error: DieselError,
    constructors: ErrorConstructors<Conn, Constraint, Query>,
) -> E
where
    Conn: FnOnce(String) -> E,
    Constraint: FnOnce(String) -> E,
    Query: FnOnce(String) -> E,
{
    let ErrorConstructors {
        connection,
        constraint,
        query,
    } = constructors;

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            match kind {
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                    connection("database connection error".to_owned())
                }
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation => {
                    let message = match info.constraint_name() {
                        Some(name) => format!("{} ({name})", info.message()),
                        None => info.message().to_owned(),
                    };
                    constraint(message)
                }
                _ => query(info.message().to_owned()),
            }
        }
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => query("database query error".to_owned()),
        other => {
            debug!(
                error_type = %std::any::type_name_of_val(&other),
                "diesel operation failed"
            );
            query("database error".to_owned())
        }
    }
}
