//! Key codes and key bindings.
//!
//! A [`Key`] is a plain code: characters (including control characters) use
//! their Unicode scalar value, navigation keys use reserved codes above
//! `char::MAX` so they can never be mistaken for text.

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

/// Mask that turns a letter into its control code, as the terminal does.
const CTRL_MASK: u32 = 0b0001_1111;

const RESERVED_BASE: u32 = char::MAX as u32 + 1;

/// A physical key press.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u32);

impl Key {
    pub const UP: Self = Self(RESERVED_BASE);
    pub const DOWN: Self = Self(RESERVED_BASE + 1);
    pub const LEFT: Self = Self(RESERVED_BASE + 2);
    pub const RIGHT: Self = Self(RESERVED_BASE + 3);
    pub const HOME: Self = Self(RESERVED_BASE + 4);
    pub const END: Self = Self(RESERVED_BASE + 5);
    pub const PAGE_UP: Self = Self(RESERVED_BASE + 6);
    pub const PAGE_DOWN: Self = Self(RESERVED_BASE + 7);
    pub const INSERT: Self = Self(RESERVED_BASE + 8);
    pub const DELETE: Self = Self(RESERVED_BASE + 9);
    pub const BACKSPACE: Self = Self(RESERVED_BASE + 10);
    pub const BACK_TAB: Self = Self(RESERVED_BASE + 11);
    const F0: u32 = RESERVED_BASE + 0x100;

    pub const fn from_code(code: u32) -> Self {
        Self(code)
    }

    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// The code a terminal sends for Ctrl plus `c`.
    ///
    /// ```
    /// use eddy::input::Key;
    ///
    /// assert_eq!(Key::ctrl('q').code(), 0x11);
    /// assert_eq!(Key::ctrl('h').code(), 0x08);
    /// ```
    pub const fn ctrl(c: char) -> Self {
        Self(c as u32 & CTRL_MASK)
    }

    /// Function key `n`.
    pub const fn function(n: u8) -> Self {
        Self(Self::F0 + n as u32)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// The character this key echoes as, if it has one.
    pub const fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Translate a crossterm key event.
    ///
    /// Returns `None` for keys with no code in this scheme (media keys,
    /// lone modifiers and the like).
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        let key = match event.code {
            KeyCode::Up => Self::UP,
            KeyCode::Down => Self::DOWN,
            KeyCode::Left => Self::LEFT,
            KeyCode::Right => Self::RIGHT,
            KeyCode::Home => Self::HOME,
            KeyCode::End => Self::END,
            KeyCode::PageUp => Self::PAGE_UP,
            KeyCode::PageDown => Self::PAGE_DOWN,
            KeyCode::Insert => Self::INSERT,
            KeyCode::Delete => Self::DELETE,
            KeyCode::Backspace => Self::BACKSPACE,
            KeyCode::BackTab => Self::BACK_TAB,
            KeyCode::F(n) => Self::function(n),
            KeyCode::Enter => Self::from_char('\r'),
            KeyCode::Tab => Self::from_char('\t'),
            KeyCode::Esc => Self::from_char('\x1b'),
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::ctrl(control_base(c))
            }
            KeyCode::Char(c) => Self::from_char(c),
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UP => f.write_str("Key::UP"),
            Self::DOWN => f.write_str("Key::DOWN"),
            Self::LEFT => f.write_str("Key::LEFT"),
            Self::RIGHT => f.write_str("Key::RIGHT"),
            _ => match self.as_char() {
                Some(c) => write!(f, "Key({c:?})"),
                None => write!(f, "Key({:#x})", self.0),
            },
        }
    }
}

/// The built-in bindings.
///
/// Control letters follow modal-editor navigation (h/j/k/l) for terminals
/// whose arrow keys do not arrive as distinct codes.
pub const DEFAULT_BINDINGS: &[(Key, Command)] = &[
    (Key::UP, Command::Up),
    (Key::ctrl('k'), Command::Up),
    (Key::DOWN, Command::Down),
    (Key::ctrl('j'), Command::Down),
    (Key::LEFT, Command::Left),
    (Key::ctrl('h'), Command::Left),
    (Key::RIGHT, Command::Right),
    (Key::ctrl('l'), Command::Right),
    (Key::ctrl('q'), Command::Quit),
];

/// Lookup from key to command. Several keys may share a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: HashMap<Key, Command>,
}

impl KeyBindings {
    pub fn new(table: &[(Key, Command)]) -> Self {
        Self {
            map: table.iter().copied().collect(),
        }
    }

    /// The command bound to `key`, or `None` for keys that echo as text.
    pub fn resolve(&self, key: Key) -> Option<Command> {
        self.map.get(&key).copied()
    }

    /// Every command some key resolves to.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.map.values().copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(DEFAULT_BINDINGS)
    }
}

/// The character whose control form crossterm reported as Ctrl plus `c`.
///
/// Bytes 0x1C..=0x1F arrive as Ctrl with the digits `4` to `7`, the keys
/// that produce them on a US layout.
const fn control_base(c: char) -> char {
    match c {
        '4' => '\\',
        '5' => ']',
        '6' => '^',
        '7' => '_',
        c => c,
    }
}
