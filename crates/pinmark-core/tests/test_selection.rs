use pinmark_core::error::PinmarkError;
use pinmark_core::geometry::pos2;
use pinmark_core::points::{AnnotatedPoint, PointId, PointStore};
use pinmark_core::selection::{SelectionSession, SelectionState};

fn store() -> PointStore {
    let mut store = PointStore::new();
    store
        .add(AnnotatedPoint::new(
            PointId(1),
            pos2(10.0, 10.0),
            "Harbor",
            "Boats come in here",
        ))
        .unwrap();
    store
        .add(AnnotatedPoint::new(PointId(2), pos2(20.0, 20.0), "Lighthouse", "Tall"))
        .unwrap();
    store
}

fn editing(store: &PointStore, id: u64) -> SelectionSession {
    let mut session = SelectionSession::new();
    session.select(PointId(id), store).unwrap();
    session.begin_edit().unwrap();
    session
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_has_no_selection() {
    let session = SelectionSession::new();
    assert_eq!(session.state(), &SelectionState::NoSelection);
    assert!(session.selected_id().is_none());
}

#[test]
fn test_select_moves_to_viewing() {
    let store = store();
    let mut session = SelectionSession::new();
    session.select(PointId(1), &store).unwrap();
    assert_eq!(session.state(), &SelectionState::Viewing { id: PointId(1) });
    assert_eq!(session.selected(&store).unwrap().title, "Harbor");
}

#[test]
fn test_select_missing_clears_selection() {
    let store = store();
    let mut session = SelectionSession::new();
    session.select(PointId(1), &store).unwrap();
    let err = session.select(PointId(9), &store).unwrap_err();
    assert!(matches!(err, PinmarkError::NotFound(PointId(9))));
    assert!(session.selected_id().is_none());
}

#[test]
fn test_select_discards_draft() {
    let store = store();
    let mut session = editing(&store, 1);
    session.set_draft_title("Half typed").unwrap();
    session.select(PointId(2), &store).unwrap();
    assert!(!session.is_editing());
    assert!(session.draft().is_none());
}

#[test]
fn test_begin_edit_requires_viewing() {
    let mut session = SelectionSession::new();
    let err = session.begin_edit().unwrap_err();
    assert!(matches!(err, PinmarkError::InvalidTransition { .. }));

    let store = store();
    let mut session = editing(&store, 1);
    assert!(session.begin_edit().is_err());
    assert!(session.is_editing());
}

#[test]
fn test_begin_edit_starts_untouched() {
    let store = store();
    let session = editing(&store, 1);
    let draft = session.draft().unwrap();
    assert!(!draft.title.is_touched());
    assert_eq!(draft.title.display("Harbor"), "Harbor");
    assert_eq!(draft.description.display("Boats come in here"), "Boats come in here");
}

#[test]
fn test_set_draft_outside_editing_rejected() {
    let store = store();
    let mut session = SelectionSession::new();
    session.select(PointId(1), &store).unwrap();
    assert!(session.set_draft_title("x").is_err());
    assert!(session.set_draft_description("x").is_err());
}

// ---------------------------------------------------------------------------
// Commit / cancel / delete
// ---------------------------------------------------------------------------

#[test]
fn test_commit_title_only_preserves_description() {
    let mut store = store();
    let mut session = editing(&store, 1);
    session.set_draft_title("Old harbor").unwrap();
    session.commit(&mut store).unwrap();

    let p = store.get(PointId(1)).unwrap();
    assert_eq!(p.title, "Old harbor");
    assert_eq!(p.description, "Boats come in here");
    assert_eq!(session.state(), &SelectionState::Viewing { id: PointId(1) });
}

#[test]
fn test_commit_explicitly_cleared_field() {
    let mut store = store();
    let mut session = editing(&store, 1);
    session.set_draft_description("").unwrap();
    session.commit(&mut store).unwrap();

    let p = store.get(PointId(1)).unwrap();
    assert_eq!(p.title, "Harbor");
    assert_eq!(p.description, "");
}

#[test]
fn test_commit_without_changes_keeps_point() {
    let mut store = store();
    let before = store.get(PointId(1)).unwrap().clone();
    let mut session = editing(&store, 1);
    session.commit(&mut store).unwrap();
    assert_eq!(store.get(PointId(1)).unwrap(), &before);
    assert!(!session.is_editing());
}

#[test]
fn test_commit_outside_editing_keeps_state() {
    let mut store = store();
    let mut session = SelectionSession::new();
    session.select(PointId(2), &store).unwrap();
    assert!(session.commit(&mut store).is_err());
    assert_eq!(session.state(), &SelectionState::Viewing { id: PointId(2) });
}

#[test]
fn test_commit_after_point_vanished_clears_selection() {
    let mut store = store();
    let mut session = editing(&store, 1);
    session.set_draft_title("Gone").unwrap();
    store.remove(PointId(1));

    let err = session.commit(&mut store).unwrap_err();
    assert!(matches!(err, PinmarkError::NotFound(PointId(1))));
    assert!(session.selected_id().is_none());
}

#[test]
fn test_begin_edit_then_cancel_leaves_point_unchanged() {
    let mut store = store();
    let before = store.get(PointId(1)).unwrap().clone();
    let mut session = editing(&store, 1);
    session.set_draft_title("Discard me").unwrap();
    session.set_draft_description("Me too").unwrap();
    session.cancel();

    assert_eq!(store.get(PointId(1)).unwrap(), &before);
    assert_eq!(session.state(), &SelectionState::Viewing { id: PointId(1) });

    // A fresh edit starts from an empty draft again.
    session.begin_edit().unwrap();
    assert!(!session.draft().unwrap().title.is_touched());
    session.commit(&mut store).unwrap();
    assert_eq!(store.get(PointId(1)).unwrap(), &before);
}

#[test]
fn test_delete_selected_removes_and_clears() {
    let mut store = store();
    let mut session = editing(&store, 2);
    let removed = session.delete_selected(&mut store).unwrap();
    assert_eq!(removed.title, "Lighthouse");
    assert!(!store.contains(PointId(2)));
    assert_eq!(session.state(), &SelectionState::NoSelection);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut store = store();
    let mut session = SelectionSession::new();
    assert!(session.delete_selected(&mut store).is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_reconcile_clears_dangling_selection() {
    let mut store = store();
    let mut session = SelectionSession::new();
    session.select(PointId(1), &store).unwrap();
    assert!(!session.reconcile(&store));

    store.remove(PointId(1));
    assert!(session.reconcile(&store));
    assert!(session.selected_id().is_none());
}
