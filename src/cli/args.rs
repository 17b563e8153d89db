//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, NamingConvention, RelocationMode, SourceConfig};

/// Screenshot organizer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "screenshot-organizer",
    version,
    about = "Sort game screenshots into per-game folders",
    long_about = "Sorts screenshots into one folder per game.\n\n\
                  Capture tool screenshots are named after the game; platform screenshots \
                  carry an app id that is resolved against the public app catalog."
)]
pub struct Args {
    /// Directory of capture tool screenshots (`<game> M_D_YYYY...`).
    /// Can be given more than once.
    #[arg(long = "capture-dir")]
    pub capture_dirs: Vec<PathBuf>,

    /// Directory of platform screenshots (`<app id>_...`).
    /// Can be given more than once.
    #[arg(long = "platform-dir")]
    pub platform_dirs: Vec<PathBuf>,

    /// Root directory for the per-game folders.
    #[arg(short = 'd', long, env = "SCREENSHOT_ORGANIZER_DESTINATION")]
    pub destination: Option<PathBuf>,

    /// JSON file of raw name -> folder name overrides.
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Location of the app id cache.
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Move files, or copy them and keep the originals.
    #[arg(long, value_enum)]
    pub mode: Option<RelocationModeArg>,

    /// Path to configuration file.
    #[arg(short, long, env = "SCREENSHOT_ORGANIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only report where files would go.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Download the app catalog even if a cache exists.
    #[arg(long)]
    pub refresh_catalog: bool,

    /// Exit with a non-zero code when any file was skipped.
    #[arg(long)]
    pub strict: bool,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI relocation mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RelocationModeArg {
    /// Move files into their game folder.
    Move,
    /// Copy files, leaving the originals in place.
    Copy,
}

impl From<RelocationModeArg> for RelocationMode {
    fn from(arg: RelocationModeArg) -> Self {
        match arg {
            RelocationModeArg::Move => RelocationMode::Move,
            RelocationModeArg::Copy => RelocationMode::Copy,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Sources given on the command line replace the configured ones
        if !self.capture_dirs.is_empty() || !self.platform_dirs.is_empty() {
            let capture = self.capture_dirs.into_iter().map(|path| SourceConfig {
                path,
                convention: NamingConvention::Capture,
            });
            let platform = self.platform_dirs.into_iter().map(|path| SourceConfig {
                path,
                convention: NamingConvention::Platform,
            });
            config.sources = capture.chain(platform).collect();
        }

        if let Some(destination) = self.destination {
            config.options.destination = Some(destination);
        }

        if let Some(mapping) = self.mapping {
            config.options.mapping_file = Some(mapping);
        }

        if let Some(cache) = self.cache {
            config.options.cache_file = Some(cache);
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.refresh_catalog {
            config.options.refresh_catalog = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
