//! Domain primitives and ports.
//!
//! Value objects validate on construction; ports keep the HTTP adapter free
//! of storage concerns.

pub mod error;
pub mod mark;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::mark::{MarkSubmission, MarkValidationError};
