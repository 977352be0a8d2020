use approx::assert_abs_diff_eq;

use pinmark_core::annotator::{Annotator, CanvasEvent, EditAction, Notice};
use pinmark_core::config::{AnnotatorConfig, SeedPoint};
use pinmark_core::drag::AbortReason;
use pinmark_core::geometry::{pos2, vec2, Pos2};
use pinmark_core::points::PointId;
use pinmark_core::selection::SelectionState;
use pinmark_core::viewport::WheelDirection;

fn drop_template(a: &mut Annotator, at: Pos2) -> Option<Notice> {
    let anchor = a.template_position();
    a.handle(CanvasEvent::TemplateDragStart { pointer: anchor });
    a.handle(CanvasEvent::TemplateDragMove { pointer: at });
    a.handle(CanvasEvent::TemplateDragEnd { pointer: Some(at) })
}

fn created_id(notice: Option<Notice>) -> PointId {
    match notice {
        Some(Notice::Created(id)) => id,
        other => panic!("expected a created point, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn test_default_session_has_demo_points() {
    let a = Annotator::default();
    let titles: Vec<&str> = a.points().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Point 1", "Point 2", "Point 3"]);
    assert_eq!(a.selection(), &SelectionState::NoSelection);
}

#[test]
fn test_duplicate_seed_points_are_skipped() {
    let seed = |id, title: &str| SeedPoint {
        id,
        x: 0.0,
        y: 0.0,
        title: title.into(),
        description: String::new(),
    };
    let config = AnnotatorConfig {
        points: vec![seed(4, "first"), seed(4, "second")],
        ..AnnotatorConfig::default()
    };
    let a = Annotator::new(&config);
    assert_eq!(a.points().len(), 1);
    assert_eq!(a.points()[0].title, "first");
}

#[test]
fn test_new_ids_do_not_collide_with_seeds() {
    let mut a = Annotator::default();
    let id = created_id(drop_template(&mut a, pos2(120.0, 80.0)));
    assert_eq!(id, PointId(4));
}

// ---------------------------------------------------------------------------
// Viewport events
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_zooms_around_pointer() {
    let mut a = Annotator::default();
    let pointer = pos2(200.0, 150.0);
    let anchor = a.viewport().to_canvas_space(pointer);
    a.handle(CanvasEvent::Wheel {
        pointer: Some(pointer),
        direction: WheelDirection::In,
    });

    let v = a.viewport();
    assert_abs_diff_eq!(v.scale, 1.1, epsilon = 1e-6);
    let screen = v.to_screen_space(anchor);
    assert_abs_diff_eq!(screen.x, pointer.x, epsilon = 1e-3);
    assert_abs_diff_eq!(screen.y, pointer.y, epsilon = 1e-3);
}

#[test]
fn test_wheel_without_pointer_changes_nothing() {
    let mut a = Annotator::default();
    let before = a.viewport();
    a.handle(CanvasEvent::Wheel {
        pointer: None,
        direction: WheelDirection::In,
    });
    assert_eq!(a.viewport(), before);
}

#[test]
fn test_pan_ignored_while_dragging_template() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::TemplateDragStart {
        pointer: pos2(30.0, 20.0),
    });
    assert!(!a.panning_enabled());
    a.handle(CanvasEvent::Pan {
        delta: vec2(50.0, 50.0),
    });
    assert_eq!(a.viewport().offset_x, 0.0);

    a.handle(CanvasEvent::TemplateDragEnd { pointer: None });
    a.handle(CanvasEvent::Pan {
        delta: vec2(50.0, 50.0),
    });
    assert_eq!(a.viewport().offset_x, 50.0);
}

#[test]
fn test_reset_view_fits_image_below_toolbar() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::ResetView {
        available: vec2(800.0, 640.0),
    });
    let v = a.viewport();
    assert_abs_diff_eq!(v.scale, 2.0, epsilon = 1e-5);

    let bounds = a.layout().image_bounds();
    let top_left = v.to_screen_space(bounds.min);
    assert_abs_diff_eq!(top_left.x, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(top_left.y, a.layout().toolbar_height, epsilon = 1e-3);
}

// ---------------------------------------------------------------------------
// Drag to create
// ---------------------------------------------------------------------------

#[test]
fn test_drop_creates_selected_point_in_edit_mode() {
    let mut a = Annotator::default();
    let id = created_id(drop_template(&mut a, pos2(120.0, 80.0)));

    let p = a.selected_point().unwrap();
    assert_eq!(p.id, id);
    assert_eq!(p.title, "New Point");
    assert_eq!((p.x, p.y), (120.0, 80.0));
    assert!(a.is_editing());
    assert_eq!(a.points().last().unwrap().id, id);
    assert_eq!(a.template_position(), a.layout().template_anchor);
}

#[test]
fn test_drop_after_zoom_lands_under_pointer() {
    let mut a = Annotator::default();
    for _ in 0..3 {
        a.handle(CanvasEvent::Wheel {
            pointer: Some(pos2(100.0, 200.0)),
            direction: WheelDirection::In,
        });
    }
    let at = pos2(180.0, 260.0);
    let id = created_id(drop_template(&mut a, at));
    let p = a.store().get(id).unwrap();
    let screen = a.viewport().to_screen_space(p.position());
    assert_abs_diff_eq!(screen.x, at.x, epsilon = 1e-3);
    assert_abs_diff_eq!(screen.y, at.y, epsilon = 1e-3);
}

#[test]
fn test_drop_on_toolbar_reports_abort() {
    let mut a = Annotator::default();
    let notice = drop_template(&mut a, pos2(300.0, 20.0));
    assert_eq!(notice, Some(Notice::DropAborted(AbortReason::OverToolbar)));
    assert_eq!(a.points().len(), 3);
}

// ---------------------------------------------------------------------------
// Selection and editing
// ---------------------------------------------------------------------------

#[test]
fn test_click_selects_point_under_pointer() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(203.0, 152.0)),
    });
    assert_eq!(a.selected_point().unwrap().title, "Point 2");
    assert!(!a.is_editing());
}

#[test]
fn test_click_on_empty_space_keeps_selection() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(100.0, 100.0)),
    });
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(350.0, 300.0)),
    });
    assert_eq!(a.selected_point().unwrap().title, "Point 1");
}

#[test]
fn test_click_follows_zoom() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Wheel {
        pointer: Some(pos2(0.0, 0.0)),
        direction: WheelDirection::In,
    });
    // Point 3 sits at canvas (150, 200); at scale 1.1 that is screen (165, 220).
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(165.0, 220.0)),
    });
    assert_eq!(a.selected_point().unwrap().title, "Point 3");
}

#[test]
fn test_click_without_pointer_is_ignored() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click { pointer: None });
    assert_eq!(a.selection(), &SelectionState::NoSelection);
}

#[test]
fn test_edit_title_and_save() {
    let mut a = Annotator::default();
    let id = created_id(drop_template(&mut a, pos2(120.0, 80.0)));
    a.apply(EditAction::SetTitle("Fountain".into()));
    let notice = a.apply(EditAction::Save);

    assert_eq!(notice, Some(Notice::Saved(id)));
    let p = a.selected_point().unwrap();
    assert_eq!(p.title, "Fountain");
    assert_eq!(p.description, "Click to edit description");
    assert!(!a.is_editing());
}

#[test]
fn test_cancel_keeps_committed_text() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(100.0, 100.0)),
    });
    a.apply(EditAction::BeginEdit);
    a.apply(EditAction::SetTitle("Nope".into()));
    a.apply(EditAction::SetDescription("Nope".into()));
    a.apply(EditAction::Cancel);

    let p = a.selected_point().unwrap();
    assert_eq!(p.title, "Point 1");
    assert_eq!(p.description, "This is an interesting location");
}

#[test]
fn test_reclicking_selected_point_keeps_draft() {
    let mut a = Annotator::default();
    let click = CanvasEvent::Click {
        pointer: Some(pos2(100.0, 100.0)),
    };
    a.handle(click);
    a.apply(EditAction::BeginEdit);
    a.apply(EditAction::SetTitle("Typing".into()));
    a.handle(click);
    assert!(a.is_editing());
}

#[test]
fn test_delete_removes_point_and_clears_selection() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(200.0, 150.0)),
    });
    let notice = a.apply(EditAction::Delete);

    assert_eq!(
        notice,
        Some(Notice::Deleted {
            id: PointId(2),
            title: "Point 2".into(),
        })
    );
    assert_eq!(a.selection(), &SelectionState::NoSelection);
    assert!(a.points().iter().all(|p| p.id != PointId(2)));
}

#[test]
fn test_edit_actions_without_selection_do_nothing() {
    let mut a = Annotator::default();
    assert!(a.apply(EditAction::BeginEdit).is_none());
    assert!(a.apply(EditAction::SetTitle("x".into())).is_none());
    assert!(a.apply(EditAction::Save).is_none());
    assert!(a.apply(EditAction::Delete).is_none());
    assert_eq!(a.points().len(), 3);
}

#[test]
fn test_hovered_point_uses_marker_radius() {
    let a = Annotator::default();
    assert_eq!(a.hovered_point(pos2(109.0, 100.0)), Some(PointId(1)));
    assert_eq!(a.hovered_point(pos2(111.0, 100.0)), None);
}

#[test]
fn test_set_image_size_moves_drop_bounds() {
    let mut a = Annotator::default();
    let outside = pos2(600.0, 100.0);
    assert_eq!(
        drop_template(&mut a, outside),
        Some(Notice::DropAborted(AbortReason::OutsideImage))
    );

    a.set_image_size(800, 600);
    created_id(drop_template(&mut a, outside));
}

#[test]
fn test_draft_shows_committed_text_until_typed() {
    let mut a = Annotator::default();
    a.handle(CanvasEvent::Click {
        pointer: Some(pos2(100.0, 100.0)),
    });
    assert!(a.draft().is_none());

    a.apply(EditAction::BeginEdit);
    a.apply(EditAction::SetDescription(String::new()));
    let draft = a.draft().unwrap();
    assert_eq!(draft.title.display("Point 1"), "Point 1");
    assert_eq!(draft.description.display("This is an interesting location"), "");
}

#[test]
fn test_zero_scale_initial_view_is_repaired() {
    let config = AnnotatorConfig::from_toml_str("[initial_view]\nscale = 0.0\n").unwrap();
    let mut a = Annotator::new(&config);
    assert_eq!(a.viewport().scale, 1.0);

    a.handle(CanvasEvent::Wheel {
        pointer: Some(pos2(100.0, 100.0)),
        direction: WheelDirection::In,
    });
    let v = a.viewport();
    assert_abs_diff_eq!(v.scale, 1.1, epsilon = 1e-6);
    assert!(v.offset_x.is_finite() && v.offset_y.is_finite());
}

#[test]
fn test_markers_under_toolbar_cannot_be_clicked() {
    let mut a = Annotator::default();
    // Point 1 at canvas (100, 100) now sits at screen (100, 20), under the strip.
    a.handle(CanvasEvent::Pan {
        delta: vec2(0.0, -80.0),
    });
    let screen = pos2(100.0, 20.0);
    assert!(a.layout().toolbar_contains(screen));
    assert_eq!(a.hovered_point(screen), None);

    a.handle(CanvasEvent::Click {
        pointer: Some(screen),
    });
    assert_eq!(a.selection(), &SelectionState::NoSelection);
}
