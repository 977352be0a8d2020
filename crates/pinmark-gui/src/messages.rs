use std::path::PathBuf;

/// Messages sent from dialog threads back to the UI thread.
pub enum AppMessage {
    /// The user picked an image in the open dialog.
    OpenImage { path: PathBuf },
}
