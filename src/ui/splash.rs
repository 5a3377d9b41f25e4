use crate::cursor::Dimensions;
use crate::terminal::text_width;

use super::fit_width;

pub const TITLE: &str = "Eddy";

pub const LOGO: [&str; 5] = [
    r"   / ____/___/ /___/ /_  __",
    r"  / __/ / __  / __  / / / /",
    r" / /___/ /_/ / /_/ / /_/ /",
    r"/_____/\__,_/\__,_/\__, /",
    r"                 /____/",
];

/// Options for the splash screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashOptions {
    /// Draw the ASCII logo above the title when it fits.
    pub logo: bool,
    pub version: String,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            logo: false,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl SplashOptions {
    pub fn with_logo(mut self, logo: bool) -> Self {
        self.logo = logo;
        self
    }

    fn version_line(&self) -> String {
        format!("version {}", self.version)
    }
}

/// Row of the title line for a terminal `rows` tall.
pub const fn title_row(rows: u16) -> usize {
    rows.saturating_sub(1) as usize / 3
}

/// Lay out the splash screen.
///
/// Produces `rows - 1` lines, leaving the bottom row free for status
/// messages. The title sits at [`title_row`] with the version line just
/// below; every other line is blank unless the logo is drawn.
pub fn splash_lines(dims: Dimensions, options: &SplashOptions) -> Vec<String> {
    let cols = usize::from(dims.cols);
    let visible = usize::from(dims.rows.saturating_sub(1));
    let title_at = title_row(dims.rows);

    let mut lines = Vec::with_capacity(visible);
    for i in 0..visible.saturating_sub(1) {
        if i == title_at {
            lines.push(fit_width(&center(TITLE, cols), dims.cols));
            lines.push(fit_width(&center(&options.version_line(), cols), dims.cols));
        } else {
            lines.push(String::new());
        }
    }

    if options.logo {
        place_logo(&mut lines, title_at, dims.cols);
    }
    lines
}

/// Pad `text` to `width` columns with the extra odd space on the right.
///
/// Text at least `width` cells wide is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text_width(text);
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn place_logo(lines: &mut [String], title_at: usize, cols: u16) {
    let logo_width = LOGO.iter().map(|l| text_width(l)).max().unwrap_or(0);
    if title_at < LOGO.len()
        || title_at > lines.len()
        || logo_width > usize::from(cols.saturating_sub(1))
    {
        return;
    }
    // The logo keeps its shape, so every line shares one left pad.
    let left = (usize::from(cols) - logo_width) / 2;
    let start = title_at - LOGO.len();
    for (line, art) in lines[start..title_at].iter_mut().zip(LOGO) {
        *line = fit_width(&format!("{}{}", " ".repeat(left), art), cols);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> SplashOptions {
        SplashOptions {
            logo: false,
            version: "0.0.1".to_string(),
        }
    }

    #[test]
    fn test_splash_has_one_line_per_row_but_the_last() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain());
        assert_eq!(lines.len(), 23);
    }

    #[test]
    fn test_title_is_centered_at_a_third_of_the_screen() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain());
        assert_eq!(title_row(24), 7);
        let title = &lines[7];
        assert_eq!(title.trim(), "Eddy");
        assert_eq!(title.find("Eddy"), Some(38));
        assert_eq!(title.chars().count(), 79);
    }

    #[test]
    fn test_version_follows_title() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain());
        assert_eq!(lines[8].trim(), "version 0.0.1");
        assert_eq!(lines[8].find("version"), Some((80 - 13) / 2));
    }

    #[test]
    fn test_other_lines_are_blank() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain());
        for (i, line) in lines.iter().enumerate() {
            if i != 7 && i != 8 {
                assert!(line.is_empty(), "line {i} = {line:?}");
            }
        }
    }

    #[test]
    fn test_lines_never_exceed_display_width() {
        for cols in [1u16, 2, 4, 5, 10, 13, 80] {
            let lines = splash_lines(Dimensions::new(10, cols), &plain().with_logo(true));
            for line in &lines {
                assert!(text_width(line) < usize::from(cols).max(1), "{cols}: {line:?}");
            }
        }
    }

    #[test]
    fn test_tiny_terminals_do_not_panic() {
        assert!(splash_lines(Dimensions::new(0, 0), &plain()).is_empty());
        assert!(splash_lines(Dimensions::new(1, 80), &plain()).is_empty());
        assert!(splash_lines(Dimensions::new(2, 80), &plain()).is_empty());
        let lines = splash_lines(Dimensions::new(3, 80), &plain());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim(), "Eddy");
    }

    #[test]
    fn test_center_puts_odd_space_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_center_measures_cells() {
        assert_eq!(center("中文", 7), " 中文  ");
        assert_eq!(center("中文", 4), "中文");
    }

    #[test]
    fn test_logo_sits_directly_above_title() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain().with_logo(true));
        assert_eq!(lines[7].trim(), "Eddy");
        assert_eq!(lines[6].trim(), LOGO[4].trim());
        assert_eq!(lines[2].trim(), LOGO[0].trim());
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_logo_keeps_its_shape() {
        let lines = splash_lines(Dimensions::new(24, 80), &plain().with_logo(true));
        let pad = (80 - LOGO[0].len()) / 2;
        for (line, art) in lines[2..7].iter().zip(LOGO) {
            assert_eq!(&line[..pad], " ".repeat(pad));
            assert_eq!(&line[pad..], art);
        }
    }

    #[test]
    fn test_logo_skipped_when_it_does_not_fit() {
        let short = splash_lines(Dimensions::new(12, 80), &plain().with_logo(true));
        assert!(short.iter().all(|l| !l.contains("____")));

        let narrow = splash_lines(Dimensions::new(24, 20), &plain().with_logo(true));
        assert!(narrow.iter().all(|l| !l.contains("____")));
    }
}
