//! Screen layout and painting.
//!
//! Layout is pure: [`splash_lines`] and [`wrap_lines`] turn dimensions and
//! text into lines no wider than `cols - 1`. [`paint`] and [`paint_status`]
//! are the only functions here that touch a [`Screen`](crate::terminal::Screen).

mod paint;
mod splash;
mod wrap;

pub use paint::{paint, paint_status};
pub use splash::{LOGO, SplashOptions, TITLE, center, splash_lines, title_row};
pub use wrap::wrap_lines;

use crate::terminal::char_width;

/// Truncate `text` to the drawable width of a terminal `cols` wide.
pub fn fit_width(text: &str, cols: u16) -> String {
    let limit = usize::from(cols.saturating_sub(1));
    let mut used = 0;
    text.chars()
        .take_while(|&ch| {
            used += char_width(ch);
            used <= limit
        })
        .collect()
}
