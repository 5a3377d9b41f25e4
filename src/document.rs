//! Loading files for display.
//!
//! A [`Document`] is the file's text split into lines, ready for
//! [`wrap_lines`](crate::ui::wrap_lines). Bytes that are not valid UTF-8 are
//! replaced rather than rejected, and tabs are expanded to spaces so a line's
//! width never depends on the column it is drawn at.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::terminal::char_width;

/// Columns between tab stops when expanding file text.
pub const TAB_WIDTH: usize = 8;

/// Why a file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// The lines of a loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Read the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Open`] if the file cannot be opened and
    /// [`LoadError::Read`] if it cannot be read (a directory, for example).
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_bytes(path, &bytes))
    }

    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Self {
        Self::from_text(path, &String::from_utf8_lossy(bytes))
    }

    pub fn from_text(path: &Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: text.lines().map(expand_tabs).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines wrapped for a terminal `cols` wide.
    pub fn layout(&self, cols: u16) -> Vec<String> {
        crate::ui::wrap_lines(&self.lines, cols)
    }
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let stop = (col / TAB_WIDTH + 1) * TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', stop - col));
            col = stop;
        } else {
            out.push(ch);
            col += char_width(ch);
        }
    }
    out
}
