//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed `User` entity, the transport-agnostic
//! error payload, and the service that implements the user use-cases on top
//! of the persistence port. Serialisation contracts are documented on each
//! type.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and stable error identifier.
//! - User / NewUser: persisted and not-yet-persisted user records.
//! - UserDirectoryService: implementation of the user driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};
pub use self::user_directory::UserDirectoryService;
