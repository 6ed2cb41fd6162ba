//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UsersQuery`], [`UsersCommand`]) are called by inbound
//! adapters; the driven port ([`UserRepository`]) is implemented by outbound
//! persistence adapters. Each port exposes strongly typed errors.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::{CreateUserRequest, UsersCommand};
pub use users_query::UsersQuery;
