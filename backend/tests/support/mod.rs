//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; suites
//! that need embedded PostgreSQL pull these helpers in with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with the server message and SQLSTATE.
///
/// The `Display` implementation of `postgres::Error` often collapses database
/// errors to `db error`, which hides the cause in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}
