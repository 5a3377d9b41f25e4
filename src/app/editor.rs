use std::io;
use std::path::{Path, PathBuf};

use crate::command::Flow;
use crate::document::Document;
use crate::input::{Key, KeyBindings};
use crate::terminal::Screen;
use crate::ui::{SplashOptions, paint, paint_status, splash_lines};

/// Where the editor is in its read-dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Initializing,
    DisplayingSplash,
    DisplayingFile,
    AwaitingKey,
    Dispatching,
    Terminating,
}

/// What the screen was last painted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Blank,
    Splash,
    File(PathBuf),
    /// The splash with an error on the status row.
    LoadFailed(String),
}

/// The key-driven viewer: paints once, then turns keys into commands.
#[derive(Debug, Clone)]
pub struct Editor {
    bindings: KeyBindings,
    file_path: Option<PathBuf>,
    splash: SplashOptions,
    state: EditorState,
    view: View,
}

impl Editor {
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            bindings: KeyBindings::default(),
            file_path,
            splash: SplashOptions::default(),
            state: EditorState::Initializing,
            view: View::Blank,
        }
    }

    pub fn with_splash(mut self, splash: SplashOptions) -> Self {
        self.splash = splash;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub const fn state(&self) -> EditorState {
        self.state
    }

    pub const fn view(&self) -> &View {
        &self.view
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Paint the initial screen: the file if one was given, else the splash.
    ///
    /// A file that cannot be loaded is not fatal; the splash is shown with
    /// the error on the status row and the editor still waits for keys.
    ///
    /// # Errors
    ///
    /// Returns an error only if drawing to the screen fails.
    pub fn open<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        match self.file_path.clone() {
            None => self.show_splash(screen)?,
            Some(path) => match Document::open(&path) {
                Ok(doc) => {
                    self.state = EditorState::DisplayingFile;
                    let dims = screen.dimensions()?;
                    let lines = doc.layout(dims.cols);
                    tracing::info!(
                        path = %path.display(),
                        lines = doc.line_count(),
                        rendered = lines.len(),
                        "opened file"
                    );
                    paint(screen, &lines)?;
                    self.view = View::File(path);
                }
                Err(err) => {
                    tracing::info!(%err, "failed to open file");
                    self.show_splash(screen)?;
                    let message = format!("FAIL: {err}");
                    paint_status(screen, &message)?;
                    self.view = View::LoadFailed(message);
                }
            },
        }
        self.state = EditorState::AwaitingKey;
        Ok(())
    }

    fn show_splash<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        self.state = EditorState::DisplayingSplash;
        let dims = screen.dimensions()?;
        paint(screen, &splash_lines(dims, &self.splash))?;
        self.view = View::Splash;
        Ok(())
    }

    /// Read one key and act on it.
    ///
    /// Paints the initial screen first if [`open`](Self::open) has not run.
    /// Once the editor has terminated this returns [`Flow::Quit`] without
    /// reading anything.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the key or drawing fails.
    pub fn step<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<Flow> {
        match self.state {
            EditorState::Terminating => return Ok(Flow::Quit),
            EditorState::Initializing => self.open(screen)?,
            _ => {}
        }
        let key = screen.read_key()?;
        self.state = EditorState::Dispatching;
        let flow = self.dispatch(screen, key)?;
        self.state = match flow {
            Flow::Continue => EditorState::AwaitingKey,
            Flow::Quit => EditorState::Terminating,
        };
        Ok(flow)
    }

    /// Run until the quit command.
    ///
    /// # Errors
    ///
    /// Returns the first screen or input error.
    pub fn run<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        while self.step(screen)? == Flow::Continue {}
        tracing::info!("quit requested");
        Ok(())
    }

    fn dispatch<S: Screen + ?Sized>(&self, screen: &mut S, key: Key) -> io::Result<Flow> {
        if let Some(command) = self.bindings.resolve(key) {
            tracing::debug!(?key, %command, "dispatch");
            return command.execute(screen);
        }
        match key.as_char() {
            Some(c) => screen.write_text(c.encode_utf8(&mut [0; 4]))?,
            None => tracing::debug!(?key, "unbound key has no character form"),
        }
        Ok(Flow::Continue)
    }
}
