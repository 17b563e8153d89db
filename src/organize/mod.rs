//! Organizer module.
//!
//! Provides:
//! - Source directory scanning with the extension allow-list
//! - The per-file resolve, map and relocate loop
//! - Run statistics and skipped file tracking

pub mod driver;
pub mod report;
pub mod scan;

pub use driver::Organizer;
pub use report::{PlannedMove, RunReport, SkipReason, SkippedFile, SkippedSource};
pub use scan::{has_allowed_extension, scan_source};
