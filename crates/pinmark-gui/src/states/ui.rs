use std::path::PathBuf;

use pinmark_core::geometry::Pos2;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Canvas position under the cursor, for the status bar.
    pub cursor_canvas: Option<Pos2>,

    /// Size of the canvas panel last frame; menu actions fit against it.
    pub canvas_size: Option<egui::Vec2>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
