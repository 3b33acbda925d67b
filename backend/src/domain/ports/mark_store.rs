//! Driving port for the mark store.
//!
//! Handlers depend on this port only; the in-memory adapter lives in
//! `outbound::memory`. The store is the sole source of truth for the set of
//! marks and for the distinct-user counts derived from them.

use async_trait::async_trait;

use crate::domain::Error;

/// Current mark count for one area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaTally {
    /// Stable area identifier.
    pub id: String,
    /// Number of distinct users with a mark on the area.
    pub count: u32,
}

/// Failures raised by mark store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkStoreError {
    /// The referenced area was never registered.
    #[error("unknown area: {id}")]
    UnknownArea {
        /// The identifier that failed the lookup.
        id: String,
    },
}

impl MarkStoreError {
    /// Construct an [`MarkStoreError::UnknownArea`].
    #[must_use]
    pub fn unknown_area(id: impl Into<String>) -> Self {
        Self::UnknownArea { id: id.into() }
    }
}

impl From<MarkStoreError> for Error {
    fn from(error: MarkStoreError) -> Self {
        match error {
            MarkStoreError::UnknownArea { id } => Self::not_found(format!("unknown area: {id}")),
        }
    }
}

/// Port covering area registration, marks and the derived queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarkStore: Send + Sync {
    /// Register an area; an already-registered identifier is left untouched
    /// (insert-or-ignore).
    async fn register_area(&self, id: &str, name: &str) -> Result<(), MarkStoreError>;

    /// Current `{id, count}` for every registered area, zero counts
    /// included.
    async fn tallies(&self) -> Result<Vec<AreaTally>, MarkStoreError>;

    /// Display names of users with a mark on `area_id`, in first-mark
    /// order; `None` lists every known user instead.
    async fn attendees<'a>(&self, area_id: Option<&'a str>) -> Result<Vec<String>, MarkStoreError>;

    /// Record a mark; repeating a (user, area) pair is a no-op.
    async fn add_mark(&self, user: &str, area_id: &str) -> Result<(), MarkStoreError>;
}
