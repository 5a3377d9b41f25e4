use anyhow::{Context, Result};

use crate::app::{App, Editor};
use crate::terminal::{CrosstermKeys, Surface};

impl App {
    /// Build the editor this app runs.
    pub fn editor(&self) -> Editor {
        Editor::new(self.file_path.clone()).with_splash(self.splash.clone())
    }

    /// Take over the terminal and run the editor until quit.
    ///
    /// The terminal is restored on every path out of the loop; a panic is
    /// covered by the hook ratatui installs.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or the event
    /// loop hits an I/O failure.
    pub fn run(&self) -> Result<()> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal (eddy requires an interactive terminal)")?;
        let mut surface = Surface::new(terminal, CrosstermKeys);

        let mut editor = self.editor();
        let result = editor.run(&mut surface);

        ratatui::restore();
        result.context("Editor loop failed")
    }
}
