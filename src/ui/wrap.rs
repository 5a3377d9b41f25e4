use std::mem;

use crate::terminal::{char_width, text_width};

/// Wrap file lines to fit a terminal `cols` wide.
///
/// Each output line is at most `cols - 1` cells wide. Lines narrower than
/// that pass through untouched (empty lines included); wider ones are cut
/// into consecutive chunks at the column boundary, whatever the content, so
/// joining the chunks gives back the original line. A wide character that
/// would straddle the boundary starts the next chunk.
///
/// ```
/// use eddy::ui::wrap_lines;
///
/// let wrapped = wrap_lines(["abcdefg", "hi"], 4);
/// assert_eq!(wrapped, ["abc", "def", "g", "hi"]);
/// ```
pub fn wrap_lines<I, S>(lines: I, cols: u16) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let width = usize::from(cols.saturating_sub(1)).max(1);
    let mut out = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if text_width(line) < width {
            out.push(line.to_string());
            continue;
        }
        let mut chunk = String::new();
        let mut used = 0;
        for ch in line.chars() {
            let cells = char_width(ch);
            if used + cells > width && !chunk.is_empty() {
                out.push(mem::take(&mut chunk));
                used = 0;
            }
            chunk.push(ch);
            used += cells;
        }
        out.push(chunk);
    }
    out
}
