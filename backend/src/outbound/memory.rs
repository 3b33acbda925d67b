//! In-memory mark store adapter.
//!
//! Durable persistence is out of scope for this service, so the store keeps
//! everything in a single `RwLock`-guarded map. Counts are distinct by
//! construction: an area holds each attendee at most once, in first-mark
//! order.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{AreaTally, MarkStore, MarkStoreError};

#[derive(Debug, Default)]
struct AreaEntry {
    name: String,
    attendees: Vec<String>,
}

#[derive(Debug, Default)]
struct Inner {
    areas: BTreeMap<String, AreaEntry>,
}

/// Mark store backed by process memory; state lives for the process only.
#[derive(Debug, Default)]
pub struct InMemoryMarkStore {
    inner: RwLock<Inner>,
}

impl InMemoryMarkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarkStore for InMemoryMarkStore {
    async fn register_area(&self, id: &str, name: &str) -> Result<(), MarkStoreError> {
        let mut inner = self.inner.write().await;
        inner
            .areas
            .entry(id.to_owned())
            .or_insert_with(|| AreaEntry {
                name: name.to_owned(),
                attendees: Vec::new(),
            });
        Ok(())
    }

    async fn tallies(&self) -> Result<Vec<AreaTally>, MarkStoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .areas
            .iter()
            .map(|(id, entry)| AreaTally {
                id: id.clone(),
                count: u32::try_from(entry.attendees.len()).unwrap_or(u32::MAX),
            })
            .collect())
    }

    async fn attendees<'a>(&self, area_id: Option<&'a str>) -> Result<Vec<String>, MarkStoreError> {
        let inner = self.inner.read().await;
        match area_id {
            Some(id) => Ok(inner
                .areas
                .get(id)
                .map(|entry| entry.attendees.clone())
                .unwrap_or_default()),
            None => {
                // Every known user, deduplicated across areas.
                let users: BTreeSet<&String> = inner
                    .areas
                    .values()
                    .flat_map(|entry| entry.attendees.iter())
                    .collect();
                Ok(users.into_iter().cloned().collect())
            }
        }
    }

    async fn add_mark(&self, user: &str, area_id: &str) -> Result<(), MarkStoreError> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .areas
            .get_mut(area_id)
            .ok_or_else(|| MarkStoreError::unknown_area(area_id))?;
        if entry.attendees.iter().any(|name| name == user) {
            debug!(user, area_id, "duplicate mark ignored");
            return Ok(());
        }
        entry.attendees.push(user.to_owned());
        Ok(())
    }
}
