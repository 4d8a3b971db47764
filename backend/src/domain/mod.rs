//! Domain primitives, ports, and the directory service.
//!
//! Purpose: define the user record and its validated components, the
//! transport-agnostic error type, and the use-cases that keep emails unique.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and category.
//! - User, NewUser, UserId, UserName, EmailAddress: the directory record.
//! - UserDirectoryService: the [`ports::UserDirectory`] implementation.

pub mod error;
pub mod ports;
pub mod seed;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::seed::{SEED_USERS, seed_users};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, EmailAddress, NewUser, USER_NAME_MAX, User, UserId, UserName, UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;
