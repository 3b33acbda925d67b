//! Area-marking synchronization core for the shared world map.
//!
//! Visitors claim a display name, click a country, and the click becomes a
//! mark on a shared backend. This crate owns the rules keeping identity,
//! selection and the shared tally consistent; polygon rendering stays behind
//! the [`domain::MapView`] port and the backend behind
//! [`domain::MarkBackend`], with a reqwest adapter in [`outbound`].

pub mod domain;
pub mod outbound;

pub use domain::{
    Area, AreaId, AreaRegistry, AreaTally, BackendError, DisplayName, Fill, IdentityError,
    MapView, MarkBackend, MarkBoard, NO_ATTENDEES_PLACEHOLDER, SelectionError, User,
};
pub use outbound::HttpMarkBackend;
