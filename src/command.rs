//! Logical commands and their handlers.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::cursor;
use crate::terminal::Screen;

/// What the event loop should do after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An action decoupled from the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub const ALL: [Self; 5] = [Self::Quit, Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Run the command against `screen`.
    ///
    /// Quit clears the display and asks the caller to stop; it never exits
    /// the process itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen operation fails.
    pub fn execute<S: Screen + ?Sized>(self, screen: &mut S) -> io::Result<Flow> {
        match self {
            Self::Quit => {
                screen.clear_screen()?;
                return Ok(Flow::Quit);
            }
            Self::Up => cursor::move_row(screen, -1)?,
            Self::Down => cursor::move_row(screen, 1)?,
            Self::Left => cursor::move_col(screen, -1)?,
            Self::Right => cursor::move_col(screen, 1)?,
        }
        Ok(Flow::Continue)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command name that matched no [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
