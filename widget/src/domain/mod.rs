//! Domain types and the synchronization core.
//!
//! Value objects validate on construction and stay immutable; the board in
//! [`board`] owns all control flow between the ports in [`ports`].

pub mod area;
pub mod board;
pub mod fill;
pub mod identity;
pub mod ports;
pub mod registry;

pub use self::area::{Area, AreaId, AreaIdError, AreaTally};
pub use self::board::{
    MarkBoard, NO_ATTENDEES_PLACEHOLDER, SelectionError, SelectionSequence, SelectionTicket,
};
pub use self::fill::Fill;
pub use self::identity::{DisplayName, IdentityError, SessionIdentity, User};
pub use self::ports::{BackendError, MapView, MarkBackend};
pub use self::registry::AreaRegistry;
