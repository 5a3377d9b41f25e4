use std::io;

use crate::cursor::Position;
use crate::terminal::{Screen, text_width};

use super::fit_width;

/// Clear the screen and draw `lines` from the top, one per row.
///
/// The bottom row is left for [`paint_status`]; lines beyond the rows above
/// it are not drawn. The cursor ends at the origin.
///
/// # Errors
///
/// Returns an error if any screen operation fails.
pub fn paint<S: Screen + ?Sized>(screen: &mut S, lines: &[String]) -> io::Result<()> {
    screen.clear_screen()?;
    let dims = screen.dimensions()?;
    let visible = usize::from(dims.rows.saturating_sub(1));
    let shown = &lines[..lines.len().min(visible)];
    screen.write_text(&shown.join("\n"))?;
    screen.move_cursor(Position::ORIGIN)
}

/// Show `text` on the bottom row without moving the cursor.
///
/// # Errors
///
/// Returns an error if any screen operation fails.
pub fn paint_status<S: Screen + ?Sized>(screen: &mut S, text: &str) -> io::Result<()> {
    let dims = screen.dimensions()?;
    if dims.rows == 0 || dims.cols == 0 {
        return Ok(());
    }
    let saved = screen.cursor()?;
    let width = usize::from(dims.max_col());
    let line = fit_width(text, dims.cols);
    let padding = width.saturating_sub(text_width(&line));
    screen.move_cursor(Position::new(dims.max_row(), 0))?;
    screen.write_text(&format!("{line}{}", " ".repeat(padding)))?;
    screen.move_cursor(saved.within(dims))
}
