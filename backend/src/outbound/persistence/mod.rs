//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Explicit schema**: tables are created by the versioned SQL files in
//!   `backend/migrations`; adapters assume the schema exists.
//! - **Strongly typed errors**: Diesel and pool failures are mapped to
//!   [`UserPersistenceError`](crate::domain::ports::UserPersistenceError).
//!
//! # Example
//!
//! ```ignore
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
