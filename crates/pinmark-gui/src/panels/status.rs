use crate::app::PinmarkApp;

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(size) = app.texture.image_size {
                ui.label(format!("{} {}x{}", app.texture.label, size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.annotator.viewport().scale * 100.0));
            ui.separator();
            ui.label(format!("Points: {}", app.annotator.points().len()));
            if let Some(p) = app.ui_state.cursor_canvas {
                ui.separator();
                ui.label(format!("Canvas: {:.0}, {:.0}", p.x, p.y));
            }
        });

        ui.add_space(2.0);
    });
}
