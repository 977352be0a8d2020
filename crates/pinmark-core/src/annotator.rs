//! The annotation session: owns every piece of state and routes input to it.
//!
//! The host (the GUI) turns raw pointer and form input into [`CanvasEvent`]s
//! and [`EditAction`]s, feeds them in, and reads the render contract back out
//! each frame: [`Annotator::viewport`], [`Annotator::points`],
//! [`Annotator::template_position`] and the selection accessors.
//!
//! Nothing here propagates an error to the host. Stale ids, missing pointer
//! positions and invalid transitions are logged and dropped, so the worst a
//! user sees is that an action had no effect.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::AnnotatorConfig;
use crate::drag::{AbortReason, DragToCreateController, DropContext, DropOutcome};
use crate::error::{PinmarkError, Result};
use crate::geometry::{vec2, Pos2, Vec2};
use crate::ids::IdGenerator;
use crate::points::{AnnotatedPoint, PointId, PointStore};
use crate::scene::SceneLayout;
use crate::selection::{EditDraft, SelectionSession, SelectionState};
use crate::viewport::{ViewportState, WheelDirection, ZoomLimits};

/// Pointer input on the canvas, in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    Wheel {
        pointer: Option<Pos2>,
        direction: WheelDirection,
    },
    Pan {
        delta: Vec2,
    },
    TemplateDragStart {
        pointer: Pos2,
    },
    TemplateDragMove {
        pointer: Pos2,
    },
    TemplateDragEnd {
        pointer: Option<Pos2>,
    },
    Click {
        pointer: Option<Pos2>,
    },
    /// Fit the image into a canvas area of the given screen size.
    ResetView {
        available: Vec2,
    },
}

/// Input from the details form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    BeginEdit,
    SetTitle(String),
    SetDescription(String),
    Save,
    Cancel,
    Delete,
}

/// Something worth telling the user about.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Created(PointId),
    DropAborted(AbortReason),
    Saved(PointId),
    Deleted { id: PointId, title: String },
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPointer => write!(f, "no pointer position"),
            Self::OverToolbar => write!(f, "dropped on the toolbar"),
            Self::OutsideImage => write!(f, "dropped outside the image"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(id) => write!(f, "Created point {id}"),
            Self::DropAborted(reason) => write!(f, "No point created: {reason}"),
            Self::Saved(id) => write!(f, "Saved point {id}"),
            Self::Deleted { id, title } => write!(f, "Deleted point {id} ({title})"),
        }
    }
}

pub struct Annotator {
    store: PointStore,
    ids: IdGenerator,
    viewport: ViewportState,
    limits: ZoomLimits,
    layout: SceneLayout,
    drag: DragToCreateController,
    selection: SelectionSession,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(&AnnotatorConfig::default())
    }
}

impl Annotator {
    pub fn new(config: &AnnotatorConfig) -> Self {
        let mut store = PointStore::new();
        for seed in &config.points {
            if let Err(e) = store.add(seed.to_point()) {
                warn!(error = %e, "Skipping configured point");
            }
        }
        let ids = IdGenerator::after(&store);
        info!(points = store.len(), "Annotator ready");

        let limits = config.zoom.sanitized();
        Self {
            store,
            ids,
            viewport: config.initial_view.sanitized(&limits),
            limits,
            layout: config.scene,
            drag: DragToCreateController::new(config.scene.template_anchor),
            selection: SelectionSession::new(),
        }
    }

    // --- Render contract ---

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Points in render order.
    pub fn points(&self) -> &[AnnotatedPoint] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn template_position(&self) -> Pos2 {
        self.drag.template_position()
    }

    pub fn is_dragging_template(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn panning_enabled(&self) -> bool {
        self.drag.panning_enabled()
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn selected_point(&self) -> Option<&AnnotatedPoint> {
        self.selection.selected(&self.store)
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_editing()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.selection.draft()
    }

    /// Point under a screen position, for hover feedback.
    /// Markers under the toolbar strip are hidden and cannot be hit.
    pub fn hovered_point(&self, screen: Pos2) -> Option<PointId> {
        if self.layout.toolbar_contains(screen) {
            return None;
        }
        let canvas = self.viewport.to_canvas_space(screen);
        self.store.hit_test(canvas, self.layout.hit_radius())
    }

    // --- Inputs ---

    /// New image dimensions; moves the drop bounds with them.
    pub fn set_image_size(&mut self, width: u32, height: u32) {
        self.layout.image_size = vec2(width as f32, height as f32);
        debug!(width, height, "Image bounds updated");
    }

    pub fn handle(&mut self, event: CanvasEvent) -> Option<Notice> {
        let notice = match event {
            CanvasEvent::Wheel { pointer, direction } => {
                if pointer.is_none() {
                    debug!("Wheel event without pointer position, skipped");
                }
                self.viewport = self.viewport.zoom(pointer, direction, &self.limits);
                None
            }
            CanvasEvent::Pan { delta } => {
                if self.drag.panning_enabled() {
                    self.viewport = self.viewport.pan(delta);
                }
                None
            }
            CanvasEvent::TemplateDragStart { pointer } => {
                self.drag.on_drag_start(pointer);
                None
            }
            CanvasEvent::TemplateDragMove { pointer } => {
                self.drag.on_drag_move(pointer);
                None
            }
            CanvasEvent::TemplateDragEnd { pointer } => self.finish_drag(pointer),
            CanvasEvent::Click { pointer } => {
                recover(self.click(pointer));
                None
            }
            CanvasEvent::ResetView { available } => {
                self.reset_view(available);
                None
            }
        };
        self.selection.reconcile(&self.store);
        notice
    }

    pub fn apply(&mut self, action: EditAction) -> Option<Notice> {
        let result = match action {
            EditAction::BeginEdit => self.selection.begin_edit().map(|()| None),
            EditAction::SetTitle(text) => self.selection.set_draft_title(text).map(|()| None),
            EditAction::SetDescription(text) => {
                self.selection.set_draft_description(text).map(|()| None)
            }
            EditAction::Save => self.save(),
            EditAction::Cancel => {
                self.selection.cancel();
                Ok(None)
            }
            EditAction::Delete => Ok(self.delete_selected()),
        };
        self.selection.reconcile(&self.store);
        recover(result).flatten()
    }

    fn finish_drag(&mut self, pointer: Option<Pos2>) -> Option<Notice> {
        let ctx = DropContext {
            viewport: &self.viewport,
            layout: &self.layout,
            store: &mut self.store,
            ids: &mut self.ids,
            selection: &mut self.selection,
        };
        match recover(self.drag.on_drag_end(pointer, ctx))? {
            DropOutcome::Created(id) => Some(Notice::Created(id)),
            DropOutcome::Aborted(reason) => {
                debug!(%reason, "Template drop aborted");
                Some(Notice::DropAborted(reason))
            }
            DropOutcome::NotDragging => None,
        }
    }

    fn click(&mut self, pointer: Option<Pos2>) -> Result<()> {
        let screen = pointer.ok_or(PinmarkError::MissingPointer)?;
        let Some(id) = self.hovered_point(screen) else {
            return Ok(());
        };
        // Re-clicking the selected point keeps an edit in progress.
        if self.selection.selected_id() == Some(id) {
            return Ok(());
        }
        self.selection.select(id, &self.store)
    }

    fn reset_view(&mut self, available: Vec2) {
        let toolbar = self.layout.toolbar_height;
        let area = vec2(available.x, (available.y - toolbar).max(1.0));
        self.viewport = ViewportState::fit_rect(self.layout.image_bounds(), area, &self.limits)
            .pan(vec2(0.0, toolbar));
    }

    fn save(&mut self) -> Result<Option<Notice>> {
        let id = self.selection.selected_id();
        self.selection.commit(&mut self.store)?;
        Ok(id.map(Notice::Saved))
    }

    fn delete_selected(&mut self) -> Option<Notice> {
        let point = self.selection.delete_selected(&mut self.store)?;
        info!(id = %point.id, "Point deleted");
        Some(Notice::Deleted {
            id: point.id,
            title: point.title,
        })
    }
}

/// Log and swallow an error from a session operation.
fn recover<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(PinmarkError::MissingPointer) => {
            debug!("No pointer position, input skipped");
            None
        }
        Err(e @ PinmarkError::NotFound(_)) => {
            warn!(error = %e, "Stale point reference, selection cleared");
            None
        }
        Err(e) => {
            warn!(error = %e, "Operation ignored");
            None
        }
    }
}
