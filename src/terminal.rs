//! The terminal surface the editor core draws on.
//!
//! [`Screen`] is the capability the core consumes. [`Surface`] implements it
//! over any ratatui [`Backend`] paired with a [`KeySource`]; the binary pairs
//! the crossterm backend with [`CrosstermKeys`], tests pair
//! [`TestBackend`](ratatui::backend::TestBackend) with [`ScriptedKeys`].
//!
//! The core never emits escape sequences itself; everything goes through
//! the backend.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::buffer::Cell;
use unicode_width::UnicodeWidthChar;

use crate::cursor::{Dimensions, Position};
use crate::input::Key;

/// Columns between tab stops.
const TAB_WIDTH: u16 = 8;

/// Cells `ch` takes when drawn by [`Screen::write_text`].
///
/// ASCII control characters count as their two-cell caret form. A tab counts
/// as one cell; its real width depends on the column it starts at.
pub fn char_width(ch: char) -> usize {
    match ch {
        '\t' => 1,
        c if c.is_ascii_control() => 2,
        c if c.is_control() => 1,
        c => c.width().unwrap_or(0),
    }
}

/// Cells `text` takes on one row, the sum of [`char_width`].
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Operations the editor needs from a terminal.
pub trait Screen {
    /// Current grid size, queried fresh on every call.
    fn dimensions(&mut self) -> io::Result<Dimensions>;

    fn cursor(&mut self) -> io::Result<Position>;

    fn move_cursor(&mut self, pos: Position) -> io::Result<()>;

    /// Write `text` at the cursor and advance it.
    ///
    /// `'\n'` starts the next row, `'\r'` returns to column 0 and reaching the
    /// right edge wraps. Anything past the bottom-right cell is dropped.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Blank the grid and home the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// A blocking source of key presses.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Keys read from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(key) = Key::from_event(key) {
                        return Ok(key);
                    }
                    tracing::debug!(?key, "ignoring untranslatable key event");
                }
                // Resize needs no handling: dimensions are re-queried on use.
                _ => {}
            }
        }
    }
}

/// A fixed queue of keys, for driving the editor without a terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
    reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            reads: 0,
        }
    }

    /// Number of keys handed out so far.
    pub const fn reads(&self) -> usize {
        self.reads
    }

    /// Number of keys still queued.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        let key = self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted keys left")
        })?;
        self.reads += 1;
        Ok(key)
    }
}

/// A [`Screen`] backed by a ratatui terminal and a key source.
pub struct Surface<B: Backend, K> {
    terminal: ratatui::Terminal<B>,
    keys: K,
}

impl<B: Backend, K> Surface<B, K> {
    pub const fn new(terminal: ratatui::Terminal<B>, keys: K) -> Self {
        Self { terminal, keys }
    }

    pub const fn terminal(&self) -> &ratatui::Terminal<B> {
        &self.terminal
    }

    pub const fn keys(&self) -> &K {
        &self.keys
    }
}

impl From<Position> for ratatui::layout::Position {
    fn from(pos: Position) -> Self {
        Self::new(pos.col, pos.row)
    }
}

impl From<ratatui::layout::Position> for Position {
    fn from(pos: ratatui::layout::Position) -> Self {
        Self::new(pos.y, pos.x)
    }
}

impl<B, K> Screen for Surface<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    fn dimensions(&mut self) -> io::Result<Dimensions> {
        let size = self.terminal.size().map_err(io::Error::other)?;
        Ok(Dimensions::new(size.height, size.width))
    }

    fn cursor(&mut self) -> io::Result<Position> {
        self.terminal
            .get_cursor_position()
            .map(Position::from)
            .map_err(io::Error::other)
    }

    fn move_cursor(&mut self, pos: Position) -> io::Result<()> {
        self.terminal
            .set_cursor_position(pos)
            .map_err(io::Error::other)?;
        self.terminal.backend_mut().flush().map_err(io::Error::other)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let dims = self.dimensions()?;
        if dims.rows == 0 || dims.cols == 0 {
            return Ok(());
        }
        let mut pen = Pen::new(self.cursor()?.within(dims), dims);
        for ch in text.chars() {
            pen.write(ch);
        }
        self.terminal
            .backend_mut()
            .draw(pen.cells.iter().map(|(x, y, cell)| (*x, *y, cell)))
            .map_err(io::Error::other)?;
        self.move_cursor(pen.pos)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.terminal.clear().map_err(io::Error::other)?;
        self.move_cursor(Position::ORIGIN)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.next_key()
    }
}

/// Lays characters out on the grid the way a terminal would.
///
/// Control characters are shown in caret notation (`^[` for escape) so a
/// stray byte can never reach the real terminal as a control sequence.
struct Pen {
    pos: Position,
    dims: Dimensions,
    cells: Vec<(u16, u16, Cell)>,
    full: bool,
}

impl Pen {
    const fn new(pos: Position, dims: Dimensions) -> Self {
        Self {
            pos,
            dims,
            cells: Vec::new(),
            full: false,
        }
    }

    fn write(&mut self, ch: char) {
        match ch {
            '\n' => self.newline(),
            '\r' => self.pos.col = 0,
            '\t' => {
                let stop = (self.pos.col / TAB_WIDTH + 1) * TAB_WIDTH;
                for _ in self.pos.col..stop.min(self.dims.cols) {
                    self.put(' ');
                }
            }
            c if c.is_ascii_control() => {
                self.put('^');
                self.put(char::from(c as u8 ^ 0x40));
            }
            c if c.is_control() => self.put('?'),
            c => self.put(c),
        }
    }

    fn newline(&mut self) {
        if self.full {
            return;
        }
        if self.pos.row < self.dims.max_row() {
            self.pos = Position::new(self.pos.row + 1, 0);
        } else {
            self.full = true;
        }
    }

    fn put(&mut self, ch: char) {
        let width = u16::try_from(char_width(ch)).unwrap_or(1);
        if width == 0 {
            // Combining marks join the cell drawn before them.
            if let Some((_, _, cell)) = self.cells.last_mut() {
                let symbol = format!("{}{ch}", cell.symbol());
                cell.set_symbol(&symbol);
            }
            return;
        }
        if self.full || width > self.dims.cols {
            return;
        }
        if self.pos.col.saturating_add(width) > self.dims.cols {
            // A wide character never straddles the right edge.
            self.newline();
            if self.full {
                return;
            }
        }
        let mut cell = Cell::default();
        cell.set_char(ch);
        self.cells.push((self.pos.col, self.pos.row, cell));
        // The cells under the right half of a wide character are not sent to
        // the backend, the way ratatui's buffer diff skips them.
        let next = self.pos.col.saturating_add(width);
        if next <= self.dims.max_col() {
            self.pos.col = next;
        } else if self.pos.row < self.dims.max_row() {
            self.pos = Position::new(self.pos.row + 1, 0);
        } else {
            // Last cells of the grid written; the cursor stays on them.
            self.full = true;
        }
    }
}
