//! Saved default flags.
//!
//! A config file holds command-line flags, one or more per line, with `#`
//! comments. Eddy reads the global file and then a local `.eddyrc`, and the
//! flags given on the command line are layered over both with
//! [`ConfigFlags::union`]. Only the flags in [`ConfigFlags`] are understood;
//! any other token is ignored so a file written by a newer version still
//! loads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SAVED_HEADER: &str = "# eddy defaults (saved with --save)";

/// Flags that may be saved as defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub logo: bool,
    pub no_logo: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Layer `other` over `self`: switches accumulate, `other`'s log path wins.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            logo: self.logo || other.logo,
            no_logo: self.no_logo || other.no_logo,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    /// Whether the splash logo should be drawn; `--no-logo` wins.
    pub const fn show_logo(&self) -> bool {
        self.logo && !self.no_logo
    }

    /// The command-line tokens that reproduce these flags.
    ///
    /// `--logo` is left out when `--no-logo` is set, since it would have no
    /// effect.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.show_logo() {
            tokens.push("--logo".to_string());
        }
        if self.no_logo {
            tokens.push("--no-logo".to_string());
        }
        if let Some(path) = &self.debug_log {
            tokens.push(format!("--debug-log={}", path.display()));
        }
        tokens
    }
}

/// Per-user config directory for eddy, if the platform reports one.
fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(target_os = "macos")]
    let base = std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Library").join("Application Support"));

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    base.map(|dir| dir.join("eddy"))
}

/// Where `--save` writes; falls back to the local file without a home.
pub fn global_config_path() -> PathBuf {
    config_dir().map_or_else(local_override_path, |dir| dir.join("config"))
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".eddyrc")
}

/// Read the flags saved at `path`; a missing file means no flags.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ConfigFlags::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read config {}", path.display()));
        }
    };
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace);
    Ok(parse_flag_tokens(tokens))
}

/// Write `flags` to `path`, creating its directory.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut content = String::from(SAVED_HEADER);
    for token in flags.to_tokens() {
        content.push('\n');
        content.push_str(&token);
    }
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the saved flags at `path`, if any.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => {
            Err(err).with_context(|| format!("Failed to remove {}", path.display()))
        }
        _ => Ok(()),
    }
}

/// Pick the saveable flags out of a token list; anything else is ignored.
///
/// `--debug-log` takes its value either as the next token or after `=`.
pub fn parse_flag_tokens<I, S>(tokens: I) -> ConfigFlags
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = ConfigFlags::default();
    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        match token.as_ref() {
            "--logo" => flags.logo = true,
            "--no-logo" => flags.no_logo = true,
            "--debug-log" => {
                if let Some(value) = tokens.next() {
                    flags.debug_log = Some(PathBuf::from(value.as_ref()));
                }
            }
            other => {
                if let Some(value) = other.strip_prefix("--debug-log=") {
                    flags.debug_log = Some(PathBuf::from(value));
                }
            }
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let flags = parse_flag_tokens(["eddy", "--logo", "--debug-log", "eddy.log", "notes.txt"]);
        assert!(flags.logo);
        assert!(!flags.no_logo);
        assert_eq!(flags.debug_log, Some(PathBuf::from("eddy.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_positional_file() {
        assert_eq!(parse_flag_tokens(["eddy", "--logo.txt"]), ConfigFlags::default());
    }

    #[test]
    fn test_dangling_debug_log_is_ignored() {
        assert_eq!(parse_flag_tokens(["--debug-log"]).debug_log, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            logo: true,
            debug_log: Some(PathBuf::from("file.log")),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            debug_log: Some(PathBuf::from("cli.log")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.logo);
        assert_eq!(merged.debug_log, Some(PathBuf::from("cli.log")));
    }

    #[test]
    fn test_no_logo_beats_saved_logo() {
        let file = ConfigFlags {
            logo: true,
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            no_logo: true,
            ..ConfigFlags::default()
        };
        assert!(file.show_logo());
        assert!(!file.union(&cli).show_logo());
    }

    #[test]
    fn test_tokens_drop_logo_overridden_by_no_logo() {
        let flags = ConfigFlags {
            logo: true,
            no_logo: true,
            debug_log: None,
        };
        assert_eq!(flags.to_tokens(), ["--no-logo"]);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eddy").join("config");
        let flags = ConfigFlags {
            logo: true,
            no_logo: false,
            debug_log: Some(PathBuf::from("eddy.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with(SAVED_HEADER));
        assert_eq!(load_config_flags(&path).unwrap(), flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        clear_config_flags(&path).unwrap();
    }

    #[test]
    fn test_saved_merged_flags_keep_the_logo_off() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let merged = ConfigFlags {
            logo: true,
            ..ConfigFlags::default()
        }
        .union(&ConfigFlags {
            no_logo: true,
            ..ConfigFlags::default()
        });

        save_config_flags(&path, &merged).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert!(!loaded.logo);
        assert!(loaded.no_logo);
        assert_eq!(loaded.show_logo(), merged.show_logo());
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_config_flags(dir.path()).is_err());
    }
}
