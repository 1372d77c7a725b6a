//! Domain primitives, ports and use-cases.
//!
//! Purpose: define the directory entities (users and cities), the read ports
//! adapters implement, and the [`DirectoryService`] that answers the four
//! directory queries. Nothing here knows about HTTP or GraphQL.
//!
//! Public surface:
//! - `User`, `UserId`, `UserSummary`: people in the directory.
//! - `City`, `CityCode`: cities in the directory.
//! - `Error`, `ErrorCode`: transport-agnostic error payload.
//! - `TraceId`, `TRACE_ID_HEADER`: request correlation.

pub mod city;
pub mod directory_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::city::{City, CityCode, CityValidationError};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserSummary, UserValidationError};
