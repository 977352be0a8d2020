use std::path::Path;
use std::sync::mpsc;

use anyhow::Context;
use pinmark_core::annotator::{Annotator, CanvasEvent, EditAction, Notice};
use pinmark_core::config::AnnotatorConfig;
use pinmark_core::geometry::vec2;
use pinmark_core::io::image_io::{load_raster, placeholder_raster, RasterImage};

use crate::convert::raster_to_color_image;
use crate::messages::AppMessage;
use crate::panels;
use crate::states::{TextureState, UIState};

pub struct PinmarkApp {
    pub annotator: Annotator,
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub ui_state: UIState,
    pub texture: TextureState,
    pub show_about: bool,
}

impl PinmarkApp {
    pub fn new(ctx: &egui::Context, config: AnnotatorConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut app = Self {
            annotator: Annotator::new(&config),
            msg_tx,
            msg_rx,
            ui_state: UIState::default(),
            texture: TextureState::default(),
            show_about: false,
        };

        match config.image.as_deref() {
            Some(path) => app.open_image(ctx, path),
            None => app.set_image(ctx, &placeholder_raster(), "Placeholder"),
        }
        app
    }

    /// Drain messages from dialog threads.
    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::OpenImage { path } => self.open_image(ctx, &path),
            }
        }
    }

    fn open_image(&mut self, ctx: &egui::Context, path: &Path) {
        let loaded = load_raster(path)
            .with_context(|| format!("Failed to open {}", path.display()));
        match loaded {
            Ok(raster) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.set_image(ctx, &raster, &name);
                self.ui_state.file_path = Some(path.to_path_buf());
                self.ui_state
                    .add_log(format!("Opened: {} ({}x{})", path.display(), raster.width, raster.height));
                self.reset_view();
            }
            Err(e) => {
                tracing::error!("{e:#}");
                self.ui_state.add_log(format!("ERROR: {e:#}"));
                if self.texture.texture.is_none() {
                    self.set_image(ctx, &placeholder_raster(), "Placeholder");
                }
            }
        }
    }

    fn set_image(&mut self, ctx: &egui::Context, raster: &RasterImage, label: &str) {
        let texture = ctx.load_texture(
            "canvas-image",
            raster_to_color_image(raster),
            egui::TextureOptions::LINEAR,
        );
        self.texture.texture = Some(texture);
        self.texture.image_size = Some(raster.size());
        self.texture.label = label.to_string();
        self.annotator.set_image_size(raster.width, raster.height);
    }

    /// Fit the image into the canvas panel, if it has been laid out yet.
    pub fn reset_view(&mut self) {
        if let Some(size) = self.ui_state.canvas_size {
            self.handle(CanvasEvent::ResetView {
                available: vec2(size.x, size.y),
            });
        }
    }

    pub fn handle(&mut self, event: CanvasEvent) {
        let notice = self.annotator.handle(event);
        self.log_notice(notice);
    }

    pub fn apply(&mut self, action: EditAction) {
        let notice = self.annotator.apply(action);
        self.log_notice(notice);
    }

    fn log_notice(&mut self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.ui_state.add_log(notice.to_string());
        }
    }
}

impl eframe::App for PinmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::details::show(ctx, self);
        panels::canvas::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Pinmark")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Pinmark");
                        ui.label("Point annotation on images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
