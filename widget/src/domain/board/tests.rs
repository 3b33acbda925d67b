//! Behaviour coverage for the mark board synchronization rules.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::Sequence;

use super::*;
use crate::domain::area::Area;
use crate::domain::fill::{BAND_LOW, MARKED_OPACITY};
use crate::domain::ports::{BackendError, MockMapView, MockMarkBackend};
use geodata::AreaFeature;

fn registry() -> AreaRegistry {
    AreaRegistry::from_features(vec![
        AreaFeature {
            code: "FRA".into(),
            name: "France".into(),
        },
        AreaFeature {
            code: "DEU".into(),
            name: "Germany".into(),
        },
    ])
}

fn area_id(raw: &str) -> AreaId {
    AreaId::new(raw).expect("valid area id")
}

fn board_with(backend: MockMarkBackend, view: MockMapView) -> MarkBoard {
    MarkBoard::new(registry(), Arc::new(backend), Arc::new(view))
}

#[test]
fn blank_claim_fails_inline_without_backend_traffic() {
    // An unexpected call on either mock panics, so "no backend request" is
    // checked implicitly.
    let backend = MockMarkBackend::new();
    let mut view = MockMapView::new();
    view.expect_show_claim_error()
        .withf(|message| message.contains("must not be empty"))
        .times(1)
        .return_const(());

    let board = board_with(backend, view);
    let error = board.claim_identity("   ").expect_err("blank claim must fail");
    assert_eq!(error, IdentityError::EmptyName);
    assert!(board.current_user().is_none());
}

#[test]
fn claim_is_one_shot_and_disables_the_input() {
    let backend = MockMarkBackend::new();
    let mut view = MockMapView::new();
    view.expect_disable_claim_input().times(1).return_const(());
    view.expect_show_claim_error()
        .withf(|message| message.contains("already claimed"))
        .times(1)
        .return_const(());

    let board = board_with(backend, view);
    let user = board.claim_identity("  Alice ").expect("first claim succeeds");
    assert_eq!(user.display_name().as_str(), "Alice");

    let error = board.claim_identity("Bob").expect_err("second claim must fail");
    assert_eq!(error, IdentityError::AlreadyClaimed);
    let current = board.current_user().expect("identity retained");
    assert_eq!(current.display_name().as_str(), "Alice");
}

#[tokio::test]
async fn identified_selection_marks_syncs_then_lists_in_order() {
    let mut backend = MockMarkBackend::new();
    let mut seq = Sequence::new();
    backend
        .expect_submit_mark()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|user, area| user.display_name().as_str() == "Alice" && area.as_str() == "DEU")
        .returning(|_, _| Ok(()));
    backend
        .expect_fetch_tallies()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| {
            Ok(vec![AreaTally {
                id: AreaId::new("DEU").expect("valid id"),
                count: 1,
            }])
        });
    backend
        .expect_list_attendees()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|area| area.as_str() == "DEU")
        .returning(|_| Ok(vec!["Alice".to_owned()]));

    let mut view = MockMapView::new();
    view.expect_disable_claim_input().return_const(());
    view.expect_show_selection()
        .withf(|area| area.id().as_str() == "DEU" && area.name() == "Germany")
        .times(1)
        .return_const(());
    view.expect_set_area_fill()
        .withf(|id, fill| id.as_str() == "DEU" && *fill == Fill::for_count(1))
        .times(1)
        .return_const(());
    let expected = ["Alice".to_owned()];
    view.expect_render_attendees()
        .withf(move |names| names == expected.as_slice())
        .times(1)
        .return_const(());

    let board = board_with(backend, view);
    board.claim_identity("Alice").expect("claim succeeds");
    board
        .select_area(&area_id("DEU"))
        .await
        .expect("selection succeeds");
}

#[tokio::test]
async fn anonymous_selection_only_queries_attendees() {
    let mut backend = MockMarkBackend::new();
    backend
        .expect_list_attendees()
        .withf(|area| area.as_str() == "FRA")
        .times(1)
        .returning(|_| Ok(vec!["Bob".to_owned()]));

    let mut view = MockMapView::new();
    view.expect_show_selection().times(1).return_const(());
    view.expect_render_attendees().times(1).return_const(());

    let board = board_with(backend, view);
    board
        .select_area(&area_id("FRA"))
        .await
        .expect("selection succeeds");
}

#[tokio::test]
async fn empty_attendee_list_renders_exactly_one_placeholder() {
    let mut backend = MockMarkBackend::new();
    backend
        .expect_list_attendees()
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let mut view = MockMapView::new();
    view.expect_show_selection().times(1).return_const(());
    view.expect_render_attendees()
        .withf(|names| names.len() == 1 && names.first().map(String::as_str) == Some(NO_ATTENDEES_PLACEHOLDER))
        .times(1)
        .return_const(());

    let board = board_with(backend, view);
    board
        .select_area(&area_id("FRA"))
        .await
        .expect("selection succeeds");
}

#[tokio::test]
async fn unknown_area_fails_before_any_side_effect() {
    let board = board_with(MockMarkBackend::new(), MockMapView::new());
    let error = board
        .select_area(&area_id("ZZZ"))
        .await
        .expect_err("unknown area must fail");
    assert_eq!(error, SelectionError::UnknownArea { id: "ZZZ".into() });
}

#[tokio::test]
async fn failed_submission_still_syncs_and_lists() {
    let mut backend = MockMarkBackend::new();
    let mut seq = Sequence::new();
    backend
        .expect_submit_mark()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(BackendError::transport("connection refused")));
    backend
        .expect_fetch_tallies()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(Vec::new()));
    backend
        .expect_list_attendees()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Vec::new()));

    let mut view = MockMapView::new();
    view.expect_disable_claim_input().return_const(());
    view.expect_show_selection().times(1).return_const(());
    view.expect_show_notice()
        .withf(|notice| notice.contains("was not recorded") && notice.contains("Germany"))
        .times(1)
        .return_const(());
    view.expect_render_attendees().times(1).return_const(());

    let board = board_with(backend, view);
    board.claim_identity("Alice").expect("claim succeeds");
    board
        .select_area(&area_id("DEU"))
        .await
        .expect("selection still succeeds");
}

#[tokio::test]
async fn tally_entries_for_unregistered_areas_are_ignored() {
    let mut backend = MockMarkBackend::new();
    backend.expect_fetch_tallies().times(1).returning(|| {
        Ok(vec![
            AreaTally {
                id: AreaId::new("FRA").expect("valid id"),
                count: 2,
            },
            AreaTally {
                id: AreaId::new("XXX").expect("valid id"),
                count: 5,
            },
            AreaTally {
                id: AreaId::new("DEU").expect("valid id"),
                count: 0,
            },
        ])
    });

    let mut view = MockMapView::new();
    view.expect_set_area_fill()
        .withf(|id, fill| match id.as_str() {
            "FRA" => fill.color() == Some(BAND_LOW) && fill.opacity() == MARKED_OPACITY,
            "DEU" => fill.is_transparent() && fill.opacity() == 0.0,
            _ => false,
        })
        .times(2)
        .return_const(());

    let board = board_with(backend, view);
    board.refresh_tallies().await.expect("refresh succeeds");
}

#[tokio::test]
async fn refresh_tallies_propagates_fetch_failures() {
    let mut backend = MockMarkBackend::new();
    backend
        .expect_fetch_tallies()
        .times(1)
        .returning(|| Err(BackendError::timeout("deadline exceeded")));

    let board = board_with(backend, MockMapView::new());
    let error = board
        .refresh_tallies()
        .await
        .expect_err("refresh must fail");
    assert_eq!(error, BackendError::timeout("deadline exceeded"));
}

#[test]
fn selection_sequence_invalidates_earlier_tickets() {
    let sequence = SelectionSequence::default();
    let first = sequence.begin();
    assert!(sequence.is_current(first));
    let second = sequence.begin();
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));
}

/// Backend double that parks `FRA` attendee queries until the gate is
/// released (any other area releases it), so tests can force their own
/// interleavings.
struct GatedBackend {
    gate: tokio::sync::Notify,
}

#[async_trait]
impl MarkBackend for GatedBackend {
    async fn submit_mark(&self, _user: &User, _area: &AreaId) -> Result<(), BackendError> {
        Ok(())
    }

    async fn fetch_tallies(&self) -> Result<Vec<AreaTally>, BackendError> {
        Ok(Vec::new())
    }

    async fn list_attendees(&self, area: &AreaId) -> Result<Vec<String>, BackendError> {
        if area.as_str() == "FRA" {
            self.gate.notified().await;
        } else {
            self.gate.notify_one();
        }
        Ok(vec![format!("{area} visitor")])
    }
}

#[derive(Default)]
struct RecordingView {
    selections: Mutex<Vec<String>>,
    rendered: Mutex<Vec<Vec<String>>>,
}

impl MapView for RecordingView {
    fn show_selection(&self, area: &Area) {
        self.selections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(area.id().to_string());
    }

    fn set_area_fill(&self, _id: &AreaId, _fill: Fill) {}

    fn render_attendees(&self, names: &[String]) {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(names.to_vec());
    }

    fn show_claim_error(&self, _message: &str) {}

    fn disable_claim_input(&self) {}

    fn show_notice(&self, _notice: &str) {}
}

#[tokio::test]
async fn superseded_selection_never_touches_the_view() {
    let backend = Arc::new(GatedBackend {
        gate: tokio::sync::Notify::new(),
    });
    let view = Arc::new(RecordingView::default());
    let board = MarkBoard::new(registry(), backend, Arc::clone(&view) as Arc<dyn MapView>);

    // First click FRA, then DEU before FRA's attendee list has answered.
    let fra = area_id("FRA");
    let deu = area_id("DEU");
    let (first, second) = tokio::join!(board.select_area(&fra), board.select_area(&deu),);
    first.expect("first selection succeeds");
    second.expect("second selection succeeds");

    let selections = view
        .selections
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    assert_eq!(selections, vec!["FRA".to_owned(), "DEU".to_owned()]);

    // Only the newer selection's attendees ever reached the view.
    let rendered = view
        .rendered
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    assert_eq!(rendered, vec![vec!["DEU visitor".to_owned()]]);
}

#[tokio::test]
async fn failed_lookup_does_not_supersede_an_in_flight_selection() {
    let backend = Arc::new(GatedBackend {
        gate: tokio::sync::Notify::new(),
    });
    let view = Arc::new(RecordingView::default());
    let board = MarkBoard::new(
        registry(),
        Arc::clone(&backend) as Arc<dyn MarkBackend>,
        Arc::clone(&view) as Arc<dyn MapView>,
    );

    // Click FRA, then an unregistered id while FRA's attendee list is still
    // in flight. The failed click must not invalidate FRA's responses.
    let fra = area_id("FRA");
    let (first, second) = tokio::join!(board.select_area(&fra), async {
        let error = board
            .select_area(&area_id("ZZZ"))
            .await
            .expect_err("unknown area must fail");
        backend.gate.notify_one();
        error
    },);
    first.expect("first selection succeeds");
    assert_eq!(second, SelectionError::UnknownArea { id: "ZZZ".into() });

    let rendered = view
        .rendered
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    assert_eq!(rendered, vec![vec!["FRA visitor".to_owned()]]);
}
