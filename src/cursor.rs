//! Cursor coordinates and bounds-checked movement.
//!
//! Movement follows a reject-at-boundary policy: a step that would leave
//! the grid is dropped entirely rather than saturated, so the cursor never
//! makes a partial move.

use std::io;

use crate::terminal::Screen;

/// Size of the visible grid in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub rows: u16,
    pub cols: u16,
}

impl Dimensions {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Last addressable row, or 0 for an empty grid.
    pub const fn max_row(self) -> u16 {
        self.rows.saturating_sub(1)
    }

    /// Last addressable column, or 0 for an empty grid.
    pub const fn max_col(self) -> u16 {
        self.cols.saturating_sub(1)
    }
}

/// A cell coordinate, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Pull the position back inside `dims`.
    ///
    /// A shrinking terminal can leave a previously valid cursor outside the
    /// grid; this is applied before any move so the result is always valid
    /// for the dimensions just read.
    pub fn within(self, dims: Dimensions) -> Self {
        Self {
            row: self.row.min(dims.max_row()),
            col: self.col.min(dims.max_col()),
        }
    }
}

/// Apply `delta` to `pos` if the result stays within `[0, bound]`.
///
/// Out-of-range results leave `pos` unchanged.
///
/// ```
/// use eddy::cursor::clamp_step;
///
/// assert_eq!(clamp_step(3, 1, 10), 4);
/// assert_eq!(clamp_step(10, 1, 10), 10);
/// assert_eq!(clamp_step(0, -1, 10), 0);
/// ```
pub fn clamp_step(pos: u16, delta: i32, bound: u16) -> u16 {
    let next = i64::from(pos) + i64::from(delta);
    if (0..=i64::from(bound)).contains(&next) {
        u16::try_from(next).unwrap_or(pos)
    } else {
        pos
    }
}

/// Move the cursor `delta` rows, ignoring moves that would leave the grid.
///
/// # Errors
///
/// Returns an error if the screen cannot report or set the cursor.
pub fn move_row<S: Screen + ?Sized>(screen: &mut S, delta: i32) -> io::Result<()> {
    let dims = screen.dimensions()?;
    let pos = screen.cursor()?.within(dims);
    let row = clamp_step(pos.row, delta, dims.max_row());
    screen.move_cursor(Position::new(row, pos.col))
}

/// Move the cursor `delta` columns, ignoring moves that would leave the grid.
///
/// # Errors
///
/// Returns an error if the screen cannot report or set the cursor.
pub fn move_col<S: Screen + ?Sized>(screen: &mut S, delta: i32) -> io::Result<()> {
    let dims = screen.dimensions()?;
    let pos = screen.cursor()?.within(dims);
    let col = clamp_step(pos.col, delta, dims.max_col());
    screen.move_cursor(Position::new(pos.row, col))
}
