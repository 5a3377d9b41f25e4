//! The editor loop and the application that hosts it.
//!
//! - [`Editor`]: the read-dispatch-act cycle over any
//!   [`Screen`](crate::terminal::Screen)
//! - [`App::run`]: owns the real terminal for the life of the session

mod editor;
mod event_loop;

pub use editor::{Editor, EditorState, View};

use std::path::PathBuf;

use crate::ui::SplashOptions;

/// Main application struct that owns the terminal and runs the editor.
#[derive(Debug, Clone, Default)]
pub struct App {
    file_path: Option<PathBuf>,
    splash: SplashOptions,
}

impl App {
    /// Create an application that shows the splash screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` instead of the splash screen.
    pub fn with_file(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Draw the ASCII logo on the splash screen.
    pub fn with_logo(mut self, enabled: bool) -> Self {
        self.splash.logo = enabled;
        self
    }
}
