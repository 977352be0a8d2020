use pinmark_core::annotator::EditAction;

use crate::app::PinmarkApp;
use crate::panels::section_header;

const PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    egui::SidePanel::right("details")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            let Some(point) = app.annotator.selected_point().cloned() else {
                section_header(ui, "Point", None);
                ui.separator();
                ui.label(
                    egui::RichText::new("Click a marker to see its details, or drag the template onto the image to add one.")
                        .color(egui::Color32::from_gray(140)),
                );
                return;
            };

            let mode = if app.annotator.is_editing() { "editing" } else { "viewing" };
            section_header(ui, &format!("Point {}", point.id), Some(mode));
            ui.separator();

            // Form fields show the draft once touched, the committed text before.
            let draft = app.annotator.draft().map(|d| {
                (
                    d.title.display(&point.title).to_owned(),
                    d.description.display(&point.description).to_owned(),
                )
            });

            match draft {
                Some((mut title, mut description)) => {
                    ui.label("Title");
                    if ui.text_edit_singleline(&mut title).changed() {
                        app.apply(EditAction::SetTitle(title));
                    }
                    ui.add_space(4.0);
                    ui.label("Description");
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut description)
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        app.apply(EditAction::SetDescription(description));
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            app.apply(EditAction::Save);
                        }
                        if ui.button("Cancel").clicked() {
                            app.apply(EditAction::Cancel);
                        }
                        if ui
                            .button(egui::RichText::new("Delete").color(egui::Color32::from_rgb(220, 80, 80)))
                            .clicked()
                        {
                            app.apply(EditAction::Delete);
                        }
                    });
                }
                None => {
                    ui.heading(&point.title);
                    ui.add_space(4.0);
                    ui.label(&point.description);
                    ui.add_space(4.0);
                    ui.small(format!("at {:.1}, {:.1}", point.x, point.y));
                    ui.add_space(8.0);
                    if ui.button("Edit").clicked() {
                        app.apply(EditAction::BeginEdit);
                    }
                }
            }
        });
}
