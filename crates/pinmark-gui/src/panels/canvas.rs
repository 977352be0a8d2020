use pinmark_core::annotator::CanvasEvent;
use pinmark_core::geometry as scene;
use pinmark_core::viewport::WheelDirection;

use crate::app::PinmarkApp;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);
const TOOLBAR_FILL: egui::Color32 = egui::Color32::from_gray(240);
const TOOLBAR_BORDER: egui::Color32 = egui::Color32::from_gray(221);
const MARKER_FILL: egui::Color32 = egui::Color32::from_rgb(230, 40, 40);
const SELECTED_RING: egui::Color32 = egui::Color32::from_rgb(255, 200, 40);
const TOOLBAR_HINT: &str = "← Drag to add new point";

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            app.ui_state.canvas_size = Some(rect.size());

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            // Allocated after the canvas so it wins hover and drag.
            let template = template_response(ui, app, rect);

            handle_wheel(ui, app, rect);
            handle_template_drag(ui, &template, app, rect);
            handle_pan(&response, app);
            handle_clicks(&response, app, rect);
            update_hover(ctx, &response, &template, app, rect);

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, BACKGROUND);
            draw_image(&painter, app, rect);
            draw_markers(&painter, app, rect);
            draw_toolbar(&painter, app, rect);
            draw_template(&painter, app, rect);
        });
}

/// egui window position to scene screen space (relative to the canvas panel).
fn to_scene(p: egui::Pos2, rect: egui::Rect) -> scene::Pos2 {
    scene::pos2(p.x - rect.min.x, p.y - rect.min.y)
}

fn to_egui(p: scene::Pos2, rect: egui::Rect) -> egui::Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

/// Pointer position in scene screen space, `None` when off the canvas.
fn pointer_on_canvas(ui: &egui::Ui, rect: egui::Rect) -> Option<scene::Pos2> {
    ui.input(|i| i.pointer.hover_pos())
        .filter(|p| rect.contains(*p))
        .map(|p| to_scene(p, rect))
}

/// Drop position for a finished template drag, `None` when off the canvas.
/// Touch input has no hover position once the finger lifts, so the position
/// the drag last reported comes first.
fn drop_pointer(
    interact: Option<egui::Pos2>,
    hover: Option<egui::Pos2>,
    rect: egui::Rect,
) -> Option<scene::Pos2> {
    interact
        .or(hover)
        .filter(|p| rect.contains(*p))
        .map(|p| to_scene(p, rect))
}

fn template_response(ui: &mut egui::Ui, app: &PinmarkApp, rect: egui::Rect) -> egui::Response {
    let center = to_egui(app.annotator.template_position(), rect);
    let layout = app.annotator.layout();
    let size = 2.0 * (layout.marker_radius + layout.marker_stroke);
    ui.interact(
        egui::Rect::from_center_size(center, egui::vec2(size, size)),
        ui.id().with("template"),
        egui::Sense::drag(),
    )
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn handle_wheel(ui: &egui::Ui, app: &mut PinmarkApp, rect: egui::Rect) {
    if !ui.rect_contains_pointer(rect) {
        return;
    }
    // One zoom step per wheel event, regardless of its magnitude.
    let directions: Vec<WheelDirection> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                egui::Event::MouseWheel { delta, .. } => WheelDirection::from_scroll_delta(delta.y),
                _ => None,
            })
            .collect()
    });
    for direction in directions {
        let pointer = pointer_on_canvas(ui, rect);
        app.handle(CanvasEvent::Wheel { pointer, direction });
    }
}

fn handle_template_drag(ui: &egui::Ui, template: &egui::Response, app: &mut PinmarkApp, rect: egui::Rect) {
    if template.drag_started() {
        if let Some(p) = template.interact_pointer_pos() {
            app.handle(CanvasEvent::TemplateDragStart {
                pointer: to_scene(p, rect),
            });
        }
    }
    if template.dragged() {
        if let Some(p) = template.interact_pointer_pos() {
            app.handle(CanvasEvent::TemplateDragMove {
                pointer: to_scene(p, rect),
            });
        }
    }
    if template.drag_stopped() {
        let hover = ui.input(|i| i.pointer.hover_pos());
        let pointer = drop_pointer(template.interact_pointer_pos(), hover, rect);
        app.handle(CanvasEvent::TemplateDragEnd { pointer });
    }
}

fn handle_pan(response: &egui::Response, app: &mut PinmarkApp) {
    if response.dragged() {
        let delta = response.drag_delta();
        app.handle(CanvasEvent::Pan {
            delta: scene::vec2(delta.x, delta.y),
        });
    }
}

fn handle_clicks(response: &egui::Response, app: &mut PinmarkApp, rect: egui::Rect) {
    if response.double_clicked() {
        app.reset_view();
    } else if response.clicked() {
        let pointer = response.interact_pointer_pos().map(|p| to_scene(p, rect));
        app.handle(CanvasEvent::Click { pointer });
    }
}

fn update_hover(
    ctx: &egui::Context,
    response: &egui::Response,
    template: &egui::Response,
    app: &mut PinmarkApp,
    rect: egui::Rect,
) {
    let view = app.annotator.viewport();
    let hover = response.hover_pos().or_else(|| template.hover_pos());
    app.ui_state.cursor_canvas = hover.map(|p| view.to_canvas_space(to_scene(p, rect)));

    if app.annotator.is_dragging_template() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if template.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    } else if let Some(p) = response.hover_pos() {
        if app.annotator.hovered_point(to_scene(p, rect)).is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_image(painter: &egui::Painter, app: &PinmarkApp, rect: egui::Rect) {
    let Some(texture) = app.texture.texture.as_ref() else {
        return;
    };
    let view = app.annotator.viewport();
    let bounds = app.annotator.layout().image_bounds();
    let img_rect = egui::Rect::from_min_max(
        to_egui(view.to_screen_space(bounds.min), rect),
        to_egui(view.to_screen_space(bounds.max), rect),
    );
    painter.image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_markers(painter: &egui::Painter, app: &PinmarkApp, rect: egui::Rect) {
    let view = app.annotator.viewport();
    let layout = app.annotator.layout();
    let radius = layout.marker_radius * view.scale;
    let stroke = egui::Stroke::new(layout.marker_stroke * view.scale, egui::Color32::WHITE);
    let selected = app.annotator.selected_point().map(|p| p.id);

    for point in app.annotator.points() {
        let center = to_egui(view.to_screen_space(point.position()), rect);
        if selected == Some(point.id) {
            painter.circle_stroke(center, radius + 2.0 * stroke.width, egui::Stroke::new(2.0, SELECTED_RING));
        }
        painter.circle(center, radius, MARKER_FILL, stroke);
    }

    // Title of the hovered marker next to it.
    let hovered = app
        .ui_state
        .cursor_canvas
        .map(|c| view.to_screen_space(c))
        .and_then(|screen| app.annotator.hovered_point(screen))
        .and_then(|id| app.annotator.store().get(id));
    if let Some(point) = hovered {
        let anchor = to_egui(view.to_screen_space(point.position()), rect) + egui::vec2(radius + 6.0, 0.0);
        painter.text(
            anchor,
            egui::Align2::LEFT_CENTER,
            &point.title,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
}

fn draw_toolbar(painter: &egui::Painter, app: &PinmarkApp, rect: egui::Rect) {
    let layout = app.annotator.layout();
    let strip = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), layout.toolbar_height));
    painter.rect_filled(strip, 0.0, TOOLBAR_FILL);
    painter.line_segment(
        [strip.left_bottom(), strip.right_bottom()],
        egui::Stroke::new(1.0, TOOLBAR_BORDER),
    );

    let hint_pos = to_egui(layout.template_anchor, rect) + egui::vec2(layout.marker_radius + 12.0, 0.0);
    painter.text(
        hint_pos,
        egui::Align2::LEFT_CENTER,
        TOOLBAR_HINT,
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(60),
    );
}

fn draw_template(painter: &egui::Painter, app: &PinmarkApp, rect: egui::Rect) {
    let layout = app.annotator.layout();
    let center = to_egui(app.annotator.template_position(), rect);
    painter.circle(
        center,
        layout.marker_radius,
        MARKER_FILL,
        egui::Stroke::new(layout.marker_stroke, egui::Color32::WHITE),
    );
}
