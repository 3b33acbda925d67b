//! The mark board: synchronization rules between identity, selection and
//! the shared tally.
//!
//! The board owns the session identity and the area registry, and drives the
//! two outbound ports. Control flow follows the selection contract:
//!
//! - identity gates mark submission; anonymous selection only queries
//!   attendees,
//! - a submitted mark is followed by a tally sync and then the attendee
//!   query for the selected area, in that order, whether or not the
//!   submission succeeded,
//! - responses belonging to a superseded selection are discarded so a slow
//!   request can never overwrite a newer selection's display.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::area::{AreaId, AreaTally};
use super::fill::Fill;
use super::identity::{IdentityError, SessionIdentity, User};
use super::ports::{MapView, MarkBackend};
use super::registry::AreaRegistry;

/// Single list entry rendered when nobody has marked the selected area yet.
pub const NO_ATTENDEES_PLACEHOLDER: &str = "(no one has marked this country yet)";

/// Failures raised by area selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The clicked identifier is not in the registry.
    #[error("unknown area: {id}")]
    UnknownArea {
        /// The identifier that failed the lookup.
        id: String,
    },
}

/// Ticket handed out for one selection; stale tickets identify superseded
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// Monotonically increasing selection counter.
///
/// Every selection takes a ticket; only the most recent ticket is current.
/// Responses arriving under a stale ticket must not touch the view.
#[derive(Debug, Default)]
pub struct SelectionSequence {
    latest: AtomicU64,
}

impl SelectionSequence {
    /// Start a new selection and invalidate all earlier tickets.
    #[must_use]
    pub fn begin(&self) -> SelectionTicket {
        SelectionTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` still belongs to the most recent selection.
    #[must_use]
    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Widget core wiring identity, registry and the outbound ports together.
pub struct MarkBoard {
    backend: Arc<dyn MarkBackend>,
    view: Arc<dyn MapView>,
    registry: AreaRegistry,
    identity: Mutex<SessionIdentity>,
    selections: SelectionSequence,
}

impl MarkBoard {
    /// Assemble a board over a loaded registry and the two ports.
    #[must_use]
    pub fn new(registry: AreaRegistry, backend: Arc<dyn MarkBackend>, view: Arc<dyn MapView>) -> Self {
        Self {
            backend,
            view,
            registry,
            identity: Mutex::new(SessionIdentity::new()),
            selections: SelectionSequence::default(),
        }
    }

    /// Claim a display name for this session.
    ///
    /// On success the claim input is disabled; validation failures surface
    /// as an inline message and leave the identity untouched. No backend
    /// request is made either way.
    ///
    /// # Errors
    ///
    /// Propagates [`IdentityError`] from the underlying claim.
    pub fn claim_identity(&self, raw: &str) -> Result<User, IdentityError> {
        let mut identity = self
            .identity
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match identity.claim(raw) {
            Ok(user) => {
                info!(user = %user.display_name(), "display name claimed");
                self.view.disable_claim_input();
                Ok(user)
            }
            Err(error) => {
                self.view.show_claim_error(&error.to_string());
                Err(error)
            }
        }
    }

    /// The identified user, if a claim has succeeded.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.identity
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current_user()
            .cloned()
    }

    /// Handle a click on the polygon registered under `id`.
    ///
    /// The selection panel opens immediately; the network chain that
    /// follows depends on identity state and is guarded by a selection
    /// ticket so a superseded chain silently stops updating the view.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownArea`] when `id` is not registered;
    /// a failed lookup leaves the current selection (and its in-flight
    /// responses) untouched. Network failures are surfaced as view notices,
    /// never as errors.
    pub async fn select_area(&self, id: &AreaId) -> Result<(), SelectionError> {
        let area = self
            .registry
            .find(id)
            .ok_or_else(|| SelectionError::UnknownArea { id: id.to_string() })?
            .clone();
        let ticket = self.selections.begin();
        self.view.show_selection(&area);

        if let Some(user) = self.current_user() {
            if let Err(error) = self.backend.submit_mark(&user, id).await {
                warn!(area = %id, %error, "mark submission failed");
                if self.selections.is_current(ticket) {
                    self.view
                        .show_notice(&format!("your mark on {} was not recorded: {error}", area.name()));
                }
            }
            self.sync_tallies(ticket).await;
        }

        self.show_attendees(id, ticket).await;
        Ok(())
    }

    /// Pull the current tallies and restyle every matching rendered area.
    ///
    /// Entries for identifiers outside the registry are ignored; registered
    /// areas missing from the response keep their previous fill.
    ///
    /// # Errors
    ///
    /// Propagates [`super::ports::BackendError`] when the fetch fails.
    pub async fn refresh_tallies(&self) -> Result<(), super::ports::BackendError> {
        let tallies = self.backend.fetch_tallies().await?;
        self.apply_tallies(&tallies);
        Ok(())
    }

    async fn sync_tallies(&self, ticket: SelectionTicket) {
        match self.backend.fetch_tallies().await {
            Ok(tallies) => {
                if self.selections.is_current(ticket) {
                    self.apply_tallies(&tallies);
                } else {
                    debug!("discarding tally response for a superseded selection");
                }
            }
            Err(error) => {
                warn!(%error, "tally sync failed");
                if self.selections.is_current(ticket) {
                    self.view
                        .show_notice(&format!("tally refresh failed: {error}"));
                }
            }
        }
    }

    fn apply_tallies(&self, tallies: &[AreaTally]) {
        for tally in tallies {
            if self.registry.find(&tally.id).is_some() {
                self.view
                    .set_area_fill(&tally.id, Fill::for_count(tally.count));
            }
        }
    }

    async fn show_attendees(&self, id: &AreaId, ticket: SelectionTicket) {
        match self.backend.list_attendees(id).await {
            Ok(names) => {
                if !self.selections.is_current(ticket) {
                    debug!(area = %id, "discarding attendee response for a superseded selection");
                    return;
                }
                if names.is_empty() {
                    self.view
                        .render_attendees(&[NO_ATTENDEES_PLACEHOLDER.to_owned()]);
                } else {
                    self.view.render_attendees(&names);
                }
            }
            Err(error) => {
                warn!(area = %id, %error, "attendee query failed");
                if self.selections.is_current(ticket) {
                    self.view
                        .show_notice(&format!("could not load visitors for {id}: {error}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
