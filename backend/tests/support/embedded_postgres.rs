//! Per-test databases on the embedded cluster.
//!
//! Databases are created with the `postgres` client so `CREATE DATABASE`
//! runs outside a transaction; the schema comes from the embedded Diesel
//! migrations in `backend/migrations`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create an empty, migrated database and return its connection URL.
pub fn create_migrated_database(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("users_test_{}", Uuid::new_v4().simple());
    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls)
        .map_err(|err| format!("connect admin: {}", format_postgres_error(&err)))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format!("create database: {}", format_postgres_error(&err)))?;

    let url = cluster.connection().database_url(&name);
    migrate_schema(&url)?;
    Ok(url)
}

/// Run all pending Diesel migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err}"))?;
    Ok(())
}

/// Execute raw SQL against `url`, for tests that reshape the schema.
pub fn execute_sql(url: &str, sql: &str) -> Result<(), String> {
    let mut client =
        Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(sql)
        .map_err(|err| format_postgres_error(&err))
}
