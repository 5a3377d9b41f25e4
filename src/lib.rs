// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. input::KeyBindings)
    clippy::module_name_repetitions
)]

//! # Eddy
//!
//! A minimal terminal text viewer.
//!
//! Eddy shows a splash screen, or a file wrapped to the terminal width, and
//! moves a cursor around it with the arrow keys or Ctrl-H/J/K/L. Ctrl-Q
//! quits. Any other key is echoed at the cursor.
//!
//! ## Architecture
//!
//! - **Input**: key codes resolve to a closed set of commands
//! - **Commands**: each command acts on a [`terminal::Screen`]
//! - **Layout**: pure functions produce the lines to show
//! - **Editor**: the blocking read-dispatch-act loop
//!
//! ## Modules
//!
//! - [`app`]: Editor loop and terminal ownership
//! - [`command`]: Logical commands and their handlers
//! - [`cursor`]: Coordinates and bounds-checked movement
//! - [`document`]: File loading
//! - [`input`]: Key codes and bindings
//! - [`terminal`]: The screen capability and its implementations
//! - [`ui`]: Splash and file layout, painting

pub mod app;
pub mod command;
pub mod config;
pub mod cursor;
pub mod document;
pub mod input;
pub mod terminal;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Editor, EditorState};
    pub use crate::command::{Command, Flow};
    pub use crate::cursor::{Dimensions, Position};
    pub use crate::input::{Key, KeyBindings};
    pub use crate::terminal::{Screen, Surface};
}
