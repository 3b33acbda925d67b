//! Outbound port for the rendering layer.
//!
//! The map library owns polygons, tiles and DOM state; the board drives it
//! exclusively through this trait so the synchronization rules stay testable
//! without a browser. All calls are synchronous: rendering either happens
//! immediately or is queued by the adapter.

use crate::domain::area::{Area, AreaId};
use crate::domain::fill::Fill;

/// View operations the board is allowed to trigger.
#[cfg_attr(test, mockall::automock)]
pub trait MapView: Send + Sync {
    /// Reveal the selection panel for an area (label, highlight).
    fn show_selection(&self, area: &Area);

    /// Apply a fill to the polygon registered under `id`.
    fn set_area_fill(&self, id: &AreaId, fill: Fill);

    /// Replace the attendee list with `names`, already ordered and never
    /// empty (the board substitutes the placeholder entry itself).
    fn render_attendees(&self, names: &[String]);

    /// Surface an inline validation message next to the claim input.
    fn show_claim_error(&self, message: &str);

    /// Make the claim input non-interactive after a successful claim.
    fn disable_claim_input(&self);

    /// Surface a non-blocking notice, e.g. for a failed network call.
    fn show_notice(&self, notice: &str);
}
