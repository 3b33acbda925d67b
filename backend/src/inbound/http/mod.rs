//! HTTP inbound adapter exposing REST endpoints.

pub mod areas;
pub mod error;
pub mod health;
pub mod marks;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
