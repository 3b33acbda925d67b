//! Domain ports for the hexagonal boundary.

mod mark_store;

#[cfg(test)]
pub use mark_store::MockMarkStore;
pub use mark_store::{AreaTally, MarkStore, MarkStoreError};
