//! Run outcome tracking.

use std::fmt;
use std::path::PathBuf;

use crate::config::RelocationMode;
use crate::error::Error;

/// Why a file was left where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The filename does not follow the source's convention.
    NoMatch,
    /// The app id is not in the catalog, even after a refresh.
    UnknownAppId(String),
    /// Folder creation, move or copy failed.
    RelocationFailed(String),
}

impl SkipReason {
    /// Classify a per-file error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::NoMatch(_) => SkipReason::NoMatch,
            Error::UnknownAppId(id) => SkipReason::UnknownAppId(id.clone()),
            other => SkipReason::RelocationFailed(other.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMatch => write!(f, "name not recognized"),
            SkipReason::UnknownAppId(id) => write!(f, "unknown app id {}", id),
            SkipReason::RelocationFailed(msg) => write!(f, "relocation failed: {}", msg),
        }
    }
}

/// A file that was not relocated.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A source directory that could not be read.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub message: String,
}

/// A relocation computed in dry-run mode.
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Statistics for one organizer run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub moved: u64,
    pub copied: u64,
    pub planned: Vec<PlannedMove>,
    pub skipped: Vec<SkippedFile>,
    pub skipped_sources: Vec<SkippedSource>,
    pub catalog_refreshes: u32,
}

impl RunReport {
    /// Record a completed move or copy.
    pub fn record_relocated(&mut self, mode: RelocationMode) {
        match mode {
            RelocationMode::Move => self.moved += 1,
            RelocationMode::Copy => self.copied += 1,
        }
    }

    /// Record a dry-run relocation.
    pub fn record_planned(&mut self, from: PathBuf, to: PathBuf) {
        self.planned.push(PlannedMove { from, to });
    }

    /// Record a skipped file.
    pub fn record_skip(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile { path, reason });
    }

    /// Record an unreadable source directory.
    pub fn record_skipped_source(&mut self, path: PathBuf, message: String) {
        self.skipped_sources.push(SkippedSource { path, message });
    }

    /// Files moved or copied.
    pub fn total_relocated(&self) -> u64 {
        self.moved + self.copied
    }

    /// Whether anything was left behind for the user to look at.
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty() || !self.skipped_sources.is_empty()
    }
}
