//! Eddy - a minimal terminal text viewer.
//!
//! # Usage
//!
//! ```bash
//! eddy
//! eddy notes.txt
//! eddy --logo --save
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eddy::app::App;
use eddy::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A minimal terminal text viewer
#[derive(Parser, Debug)]
#[command(name = "eddy", version, about, long_about = None)]
struct Cli {
    /// File to view; the splash screen is shown without one
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Draw the ASCII logo on the splash screen
    #[arg(long)]
    logo: bool,

    /// Never draw the logo, even if saved as a default
    #[arg(long, conflicts_with = "logo")]
    no_logo: bool,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            logo: self.logo,
            no_logo: self.no_logo,
            debug_log: self.debug_log.clone(),
        }
    }
}

/// Install the tracing subscriber.
///
/// The screen belongs to the editor, so detailed logs go to a file when one
/// is configured; otherwise only warnings reach stderr.
fn init_logging(debug_log: Option<&Path>) -> Result<()> {
    if let Some(path) = debug_log {
        let file = File::create(path)
            .with_context(|| format!("Failed to create debug log {}", path.display()))?;
        let filter =
            EnvFilter::try_from_env("EDDY_LOG").unwrap_or_else(|_| EnvFilter::new("eddy=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_env("EDDY_LOG").add_directive(tracing::Level::WARN.into()),
            )
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.debug_log.as_deref())?;
    tracing::debug!(?effective, file = ?cli.file, "starting");

    if let Some(file) = cli.file.as_ref().filter(|f| !f.exists()) {
        tracing::warn!(path = %file.display(), "file not found, showing splash");
    }

    App::new()
        .with_file(cli.file)
        .with_logo(effective.show_logo())
        .run()
        .context("Application error")
}
