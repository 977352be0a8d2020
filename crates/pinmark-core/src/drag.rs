//! Drag-to-create: the toolbar's template marker as a reusable stamp.
//!
//! `Idle → Dragging → Idle`. While dragging, whole-canvas panning is off so
//! the gesture moves only the template. Dropping converts the pointer to
//! canvas space and creates a point there, unless the drop lands somewhere a
//! point cannot live.

use tracing::{debug, info};

use crate::consts::{DEFAULT_POINT_DESCRIPTION, DEFAULT_POINT_TITLE};
use crate::error::Result;
use crate::geometry::Pos2;
use crate::ids::IdGenerator;
use crate::points::{AnnotatedPoint, PointId, PointStore};
use crate::scene::SceneLayout;
use crate::selection::SelectionSession;
use crate::viewport::ViewportState;

/// Transient state of one template drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_screen_pos: Pos2,
    pub current_screen_pos: Pos2,
}

/// Why a drop did not create a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    MissingPointer,
    OverToolbar,
    OutsideImage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Created(PointId),
    Aborted(AbortReason),
    NotDragging,
}

/// Everything a drop reads or mutates besides the controller itself.
pub struct DropContext<'a> {
    pub viewport: &'a ViewportState,
    pub layout: &'a SceneLayout,
    pub store: &'a mut PointStore,
    pub ids: &'a mut IdGenerator,
    pub selection: &'a mut SelectionSession,
}

#[derive(Clone, Debug)]
pub struct DragToCreateController {
    anchor: Pos2,
    session: Option<DragSession>,
    panning_enabled: bool,
}

impl DragToCreateController {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            session: None,
            panning_enabled: true,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn panning_enabled(&self) -> bool {
        self.panning_enabled
    }

    /// Screen position to draw the template at.
    pub fn template_position(&self) -> Pos2 {
        self.session.map_or(self.anchor, |s| s.current_screen_pos)
    }

    pub fn on_drag_start(&mut self, screen_pos: Pos2) {
        if self.session.is_some() {
            debug!("Template drag already in progress");
            return;
        }
        self.panning_enabled = false;
        self.session = Some(DragSession {
            origin_screen_pos: screen_pos,
            current_screen_pos: screen_pos,
        });
        debug!(x = screen_pos.x, y = screen_pos.y, "Template drag started");
    }

    pub fn on_drag_move(&mut self, screen_pos: Pos2) {
        if let Some(session) = self.session.as_mut() {
            session.current_screen_pos = screen_pos;
        }
    }

    /// Finish the gesture and create a point at the drop position.
    ///
    /// The controller is back in `Idle` with panning enabled and the template
    /// at its anchor whatever the outcome. On creation the new point is
    /// selected in edit mode.
    pub fn on_drag_end(&mut self, drop: Option<Pos2>, ctx: DropContext<'_>) -> Result<DropOutcome> {
        self.panning_enabled = true;
        if self.session.take().is_none() {
            return Ok(DropOutcome::NotDragging);
        }

        let Some(screen) = drop else {
            return Ok(DropOutcome::Aborted(AbortReason::MissingPointer));
        };
        if ctx.layout.toolbar_contains(screen) {
            return Ok(DropOutcome::Aborted(AbortReason::OverToolbar));
        }
        let canvas = ctx.viewport.to_canvas_space(screen);
        if !ctx.layout.image_bounds().contains(canvas) {
            return Ok(DropOutcome::Aborted(AbortReason::OutsideImage));
        }

        let id = ctx.ids.next_id(ctx.store);
        ctx.store.add(AnnotatedPoint::new(
            id,
            canvas,
            DEFAULT_POINT_TITLE,
            DEFAULT_POINT_DESCRIPTION,
        ))?;
        ctx.selection.select_for_edit(id, ctx.store)?;
        info!(%id, x = canvas.x, y = canvas.y, "Point created from template");
        Ok(DropOutcome::Created(id))
    }
}
