//! Outbound adapters.

pub mod http;

pub use http::HttpMarkBackend;
