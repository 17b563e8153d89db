//! Filesystem module.
//!
//! Provides:
//! - Game folder paths and creation
//! - Moving or copying files into place

pub mod paths;
pub mod relocate;

pub use paths::{ensure_dir, game_folder};
pub use relocate::relocate;
