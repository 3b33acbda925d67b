//! Outbound ports for the widget core.

mod map_view;
mod mark_backend;

#[cfg(test)]
pub use map_view::MockMapView;
pub use map_view::MapView;
#[cfg(test)]
pub use mark_backend::MockMarkBackend;
pub use mark_backend::{BackendError, MarkBackend};
