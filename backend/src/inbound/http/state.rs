//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend on
//! the domain port only and stay testable without real storage.

use std::sync::Arc;

use crate::domain::ports::MarkStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The mark store every endpoint reads from and writes to.
    pub store: Arc<dyn MarkStore>,
}

impl HttpState {
    /// Construct state around a store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn MarkStore>) -> Self {
        Self { store }
    }
}
